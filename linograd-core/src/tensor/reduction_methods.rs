use crate::error::LinogradError;
use crate::tensor::utils::{calculate_strides, index_to_coord};
use crate::tensor::Tensor;

impl Tensor {
    /// Sum of every element.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Sums along `axis`. With `keepdim` the axis stays as size 1,
    /// otherwise it is removed from the shape.
    pub fn sum_axis(&self, axis: usize, keepdim: bool) -> Result<Tensor, LinogradError> {
        let rank = self.rank();
        if axis >= rank {
            return Err(LinogradError::AxisOutOfRange { axis, rank });
        }

        let mut kept_shape = self.shape.clone();
        kept_shape[axis] = 1;
        let kept_strides = calculate_strides(&kept_shape);
        let in_strides = calculate_strides(&self.shape);

        let mut data = vec![0.0; kept_shape.iter().product()];
        for (i, &value) in self.data.iter().enumerate() {
            let mut coords = index_to_coord(i, &in_strides, &self.shape);
            coords[axis] = 0;
            let out: usize = coords.iter().zip(&kept_strides).map(|(c, s)| c * s).sum();
            data[out] += value;
        }

        let shape = if keepdim {
            kept_shape
        } else {
            let mut removed = self.shape.clone();
            removed.remove(axis);
            removed
        };
        Tensor::new(data, shape)
    }
}

#[cfg(test)]
#[path = "reduction_methods_test.rs"]
mod tests;
