//! Reverse-mode automatic differentiation over an arena of nodes.
//!
//! Forward ops append nodes to a [`Graph`]; [`backward`] walks the nodes
//! reachable from a root in reverse topological order and accumulates
//! gradients into every ancestor.

pub mod accumulate;
pub mod backward;
pub mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod node;

pub use accumulate::reduce_to_shape;
pub use backward::backward;
pub use backward_op::BackwardOp;
pub use graph::{topological_sort, Checkpoint, Graph};
pub use node::{Node, NodeId, Op};
