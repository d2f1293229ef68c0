use crate::error::LinogradError;
use crate::tensor::Tensor;

impl Tensor {
    /// Applies `f` to every element.
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Tensor {
        Tensor {
            data: self.data.iter().map(|&x| f(x)).collect(),
            shape: self.shape.clone(),
        }
    }

    pub fn mul_scalar(&self, factor: f64) -> Tensor {
        self.map(|x| x * factor)
    }

    /// In-place elementwise addition. Shapes must be identical.
    pub fn add_(&mut self, other: &Tensor) -> Result<(), LinogradError> {
        if self.shape != other.shape {
            return Err(LinogradError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: other.shape.clone(),
                operation: "add_".to_string(),
            });
        }
        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, &b)| *a += b);
        Ok(())
    }

    /// In-place `self -= alpha * other`. Shapes must be identical.
    pub fn sub_scaled_(&mut self, alpha: f64, other: &Tensor) -> Result<(), LinogradError> {
        if self.shape != other.shape {
            return Err(LinogradError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: other.shape.clone(),
                operation: "sub_scaled_".to_string(),
            });
        }
        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, &b)| *a -= alpha * b);
        Ok(())
    }

    /// Sets every element to zero, keeping the shape.
    pub fn fill_zero_(&mut self) {
        self.data.iter_mut().for_each(|x| *x = 0.0);
    }

    /// Matrix product with numpy `dot` semantics for rank 1 and 2 operands.
    ///
    /// | lhs | rhs | result |
    /// |---|---|---|
    /// | (m, n) | (n, p) | (m, p) |
    /// | (m, n) | (n) | (m) |
    /// | (n) | (n, p) | (p) |
    /// | (n) | (n) | () |
    ///
    /// The inner dimensions are validated before any element is read.
    pub fn matmul(&self, other: &Tensor) -> Result<Tensor, LinogradError> {
        let (m, n) = matrix_dims(self, true)?;
        let (n_other, p) = matrix_dims(other, false)?;
        if n != n_other {
            return Err(LinogradError::DimensionMismatch {
                left: n,
                right: n_other,
                lhs_shape: self.shape.clone(),
                rhs_shape: other.shape.clone(),
                operation: "matmul".to_string(),
            });
        }

        let mut data = vec![0.0; m * p];
        for i in 0..m {
            for k in 0..n {
                let a = self.data[i * n + k];
                let row = &other.data[k * p..(k + 1) * p];
                for (out, &b) in data[i * p..(i + 1) * p].iter_mut().zip(row) {
                    *out += a * b;
                }
            }
        }

        let shape = match (self.rank(), other.rank()) {
            (2, 2) => vec![m, p],
            (2, 1) => vec![m],
            (1, 2) => vec![p],
            _ => vec![],
        };
        Tensor::new(data, shape)
    }
}

/// Views a rank 1 or 2 operand as a matrix. A vector on the left is a
/// single row, on the right a single column.
pub(crate) fn matrix_dims(t: &Tensor, is_lhs: bool) -> Result<(usize, usize), LinogradError> {
    match (t.shape.as_slice(), is_lhs) {
        (&[rows, cols], _) => Ok((rows, cols)),
        (&[n], true) => Ok((1, n)),
        (&[n], false) => Ok((n, 1)),
        _ => Err(LinogradError::RankMismatch {
            expected: "1 or 2".to_string(),
            actual: t.rank(),
            operation: "matmul".to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "arithmetic_methods_test.rs"]
mod tests;
