// src/tensor/mod.rs

use crate::error::LinogradError;
use std::fmt;

pub mod create;
pub mod utils;
pub mod broadcast_utils;
mod arithmetic_methods;
mod reduction_methods;
mod view_methods;

pub(crate) use arithmetic_methods::matrix_dims;
pub use create::{full, ones, ones_like, rand_uniform, randn, zeros, zeros_like};

/// A dense, row-major, contiguous `f64` array.
///
/// Rank 0 is a scalar and holds exactly one element. `Tensor` owns its data;
/// cloning copies the buffer. Shared ownership of values inside the
/// computation graph is handled by the `Graph` arena, not by the tensor.
#[derive(Clone, PartialEq)]
pub struct Tensor {
    pub(crate) data: Vec<f64>,
    pub(crate) shape: Vec<usize>,
}

impl Tensor {
    /// Creates a new Tensor with the given data and shape.
    ///
    /// Fails with `TensorCreationError` if `data.len()` differs from the
    /// product of `shape`.
    pub fn new(data: Vec<f64>, shape: Vec<usize>) -> Result<Self, LinogradError> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(LinogradError::TensorCreationError {
                data_len: data.len(),
                shape,
            });
        }
        Ok(Tensor { data, shape })
    }

    /// Creates a rank-0 tensor.
    pub fn scalar(value: f64) -> Self {
        Tensor {
            data: vec![value],
            shape: vec![],
        }
    }

    /// Creates a rank-1 tensor from a slice.
    pub fn from_slice(values: &[f64]) -> Self {
        Tensor {
            data: values.to_vec(),
            shape: vec![values.len()],
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Row-major view of the elements.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns the single element of a one-element tensor of any rank.
    pub fn item(&self) -> Result<f64, LinogradError> {
        match self.data.as_slice() {
            [value] => Ok(*value),
            _ => Err(LinogradError::ShapeMismatch {
                expected: vec![1],
                actual: self.shape.clone(),
                operation: "item".to_string(),
            }),
        }
    }

    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("data", &self.data)
            .finish()
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_scalar() {
            return write!(f, "{}", self.data[0]);
        }
        write!(f, "[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "] shape={:?}", self.shape)
    }
}
