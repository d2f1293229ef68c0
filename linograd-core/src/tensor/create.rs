// src/tensor/create.rs

use crate::error::LinogradError;
use crate::tensor::Tensor;
use crate::train::config::ensure_positive_finite;
use num_traits::{One, Zero};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;
use std::cmp::Ordering;

/// Creates a new tensor filled with zeros with the specified shape.
pub fn zeros(shape: &[usize]) -> Tensor {
    full(shape, f64::zero())
}

/// Creates a new tensor filled with ones with the specified shape.
pub fn ones(shape: &[usize]) -> Tensor {
    full(shape, f64::one())
}

/// Creates a new tensor filled with a specific value with the specified shape.
pub fn full(shape: &[usize], value: f64) -> Tensor {
    let numel = shape.iter().product();
    Tensor {
        data: vec![value; numel],
        shape: shape.to_vec(),
    }
}

/// Zeros with the shape of `other`.
pub fn zeros_like(other: &Tensor) -> Tensor {
    zeros(other.shape())
}

/// Ones with the shape of `other`.
pub fn ones_like(other: &Tensor) -> Tensor {
    ones(other.shape())
}

/// Samples every element uniformly from `[low, high)`.
pub fn rand_uniform<R: Rng + ?Sized>(
    shape: &[usize],
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<Tensor, LinogradError> {
    if low.partial_cmp(&high) != Some(Ordering::Less) {
        return Err(LinogradError::InvalidConfig(format!(
            "uniform range [{}, {}) is empty",
            low, high
        )));
    }
    let dist = Uniform::new(low, high);
    let numel: usize = shape.iter().product();
    let data = (0..numel).map(|_| dist.sample(rng)).collect();
    Tensor::new(data, shape.to_vec())
}

/// Samples every element from `N(0, std^2)`. `std` must be finite and positive.
pub fn randn<R: Rng + ?Sized>(shape: &[usize], std: f64, rng: &mut R) -> Result<Tensor, LinogradError> {
    ensure_positive_finite("std", std)?;
    let dist = Normal::new(0.0, std)
        .map_err(|e| LinogradError::InvalidConfig(format!("normal init: {}", e)))?;
    let numel: usize = shape.iter().product();
    let data = (0..numel).map(|_| dist.sample(rng)).collect();
    Tensor::new(data, shape.to_vec())
}

impl Tensor {
    /// Zero tensor with this tensor's shape.
    pub fn zeros_like(&self) -> Tensor {
        zeros_like(self)
    }

    /// One-filled tensor with this tensor's shape.
    pub fn ones_like(&self) -> Tensor {
        ones_like(self)
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
