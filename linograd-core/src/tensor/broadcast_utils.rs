use crate::error::LinogradError;
use crate::tensor::utils::{broadcast_shapes, calculate_strides, index_to_coord};
use crate::tensor::Tensor;

impl Tensor {
    /// Applies `f` elementwise to `self` and `other`, broadcasting both
    /// operands to their common shape first.
    pub fn zip_with<F>(&self, other: &Tensor, f: F) -> Result<Tensor, LinogradError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape == other.shape {
            let data = self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect();
            return Ok(Tensor {
                data,
                shape: self.shape.clone(),
            });
        }

        let result_shape = broadcast_shapes(&self.shape, &other.shape)?;
        let numel: usize = result_shape.iter().product();
        let result_strides = calculate_strides(&result_shape);
        let a_strides = calculate_strides(&self.shape);
        let b_strides = calculate_strides(&other.shape);

        let mut data = Vec::with_capacity(numel);
        for i in 0..numel {
            let coords = index_to_coord(i, &result_strides, &result_shape);
            let a = self.data[broadcast_offset(&coords, &self.shape, &a_strides)];
            let b = other.data[broadcast_offset(&coords, &other.shape, &b_strides)];
            data.push(f(a, b));
        }
        Tensor::new(data, result_shape)
    }
}

/// Offset into an operand of `shape` for output coordinates `coords`,
/// pinning broadcast (size-1 or missing) dimensions to index 0.
fn broadcast_offset(coords: &[usize], shape: &[usize], strides: &[usize]) -> usize {
    let rank_diff = coords.len() - shape.len();
    shape
        .iter()
        .zip(strides)
        .enumerate()
        .map(|(dim, (&size, &stride))| {
            if size == 1 {
                0
            } else {
                coords[rank_diff + dim] * stride
            }
        })
        .sum()
}
