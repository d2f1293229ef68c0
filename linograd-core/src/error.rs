use thiserror::Error;

/// Custom error type for the linograd engine.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum LinogradError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    /// Inner dimensions of a matrix product disagree.
    #[error("Dimension mismatch in {operation}: inner dimensions {left} and {right} differ (shapes {lhs_shape:?} and {rhs_shape:?})")]
    DimensionMismatch {
        left: usize,
        right: usize,
        lhs_shape: Vec<usize>,
        rhs_shape: Vec<usize>,
        operation: String,
    },

    #[error("Rank mismatch in {operation}: expected rank {expected}, got {actual}")]
    RankMismatch {
        expected: String,
        actual: usize,
        operation: String,
    },

    #[error("Cannot broadcast shapes: {shape1:?} and {shape2:?}")]
    BroadcastError {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    /// The accumulator could not sum a gradient back down to its parent's shape.
    /// The forward pass never produces such a pair, so this is an engine bug.
    #[error("Cannot reduce gradient of shape {gradient:?} to parent shape {target:?}")]
    ShapeReductionFailure {
        gradient: Vec<usize>,
        target: Vec<usize>,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Axis {axis} is out of range for a tensor of rank {rank}")]
    AxisOutOfRange { axis: usize, rank: usize },

    #[error("Node {index} does not exist in a graph of {len} nodes")]
    InvalidNode { index: usize, len: usize },

    #[error("Cycle detected in the computation graph at node {index}.")]
    CycleDetected { index: usize },

    #[error("Index {index} is out of bounds for {len} samples")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Cannot compute {operation} over an empty set of samples")]
    EmptyDataset { operation: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
