use crate::error::LinogradError;
use crate::tensor::Tensor;

impl Tensor {
    /// Returns a tensor with the same elements in a new shape.
    /// The element count must not change.
    pub fn reshape(&self, shape: &[usize]) -> Result<Tensor, LinogradError> {
        let numel: usize = shape.iter().product();
        if numel != self.numel() {
            return Err(LinogradError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: shape.to_vec(),
                operation: "reshape".to_string(),
            });
        }
        Ok(Tensor {
            data: self.data.clone(),
            shape: shape.to_vec(),
        })
    }

    /// Transpose of a rank-2 tensor.
    pub fn transpose(&self) -> Result<Tensor, LinogradError> {
        let (rows, cols) = match self.shape.as_slice() {
            &[rows, cols] => (rows, cols),
            _ => {
                return Err(LinogradError::RankMismatch {
                    expected: "2".to_string(),
                    actual: self.rank(),
                    operation: "transpose".to_string(),
                })
            }
        };
        let mut data = Vec::with_capacity(self.numel());
        for c in 0..cols {
            for r in 0..rows {
                data.push(self.data[r * cols + c]);
            }
        }
        Tensor::new(data, vec![cols, rows])
    }
}

#[cfg(test)]
#[path = "view_methods_test.rs"]
mod tests;
