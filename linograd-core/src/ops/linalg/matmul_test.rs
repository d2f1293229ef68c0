use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use approx::assert_relative_eq;

#[test]
fn test_matmul_forward() -> Result<(), LinogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?);
    let b = graph.leaf(Tensor::new(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], vec![3, 2])?);
    let c = matmul_op(&mut graph, a, b)?;
    assert_eq!(graph.value(c)?.shape(), &[2, 2]);
    assert_eq!(graph.value(c)?.data(), &[58.0, 64.0, 139.0, 154.0]);
    Ok(())
}

#[test]
fn test_matmul_backward_ones() -> Result<(), LinogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?);
    let b = graph.leaf(Tensor::new(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], vec![3, 2])?);
    let c = graph.matmul(a, b)?;
    graph.backward(c)?;

    // g . b^T with g = ones(2, 2): row sums of b, repeated per row of a.
    assert_relative_eq!(
        graph.grad(a)?.data(),
        &[15.0, 19.0, 23.0, 15.0, 19.0, 23.0][..],
        epsilon = 1e-12
    );
    // a^T . g: column sums of a, repeated per column of b.
    assert_relative_eq!(
        graph.grad(b)?.data(),
        &[5.0, 5.0, 7.0, 7.0, 9.0, 9.0][..],
        epsilon = 1e-12
    );
    Ok(())
}

#[test]
fn test_matmul_dimension_mismatch_adds_no_node() {
    let mut graph = Graph::new();
    let a = graph.leaf(Tensor::new(vec![0.0; 6], vec![2, 3]).unwrap());
    let b = graph.leaf(Tensor::new(vec![0.0; 6], vec![2, 3]).unwrap());
    let result = matmul_op(&mut graph, a, b);
    assert!(matches!(
        result,
        Err(LinogradError::DimensionMismatch { left: 3, right: 2, .. })
    ));
    assert_eq!(graph.len(), 2);
}

#[test]
fn test_matmul_grad_check_matrices() -> Result<(), GradCheckError> {
    let a = Tensor::new(vec![0.2, -0.5, 1.1, 0.9, -1.4, 0.3], vec![2, 3])?;
    let b = Tensor::new(vec![1.2, -0.7, 0.4, 2.0, -0.1, 0.6], vec![3, 2])?;
    check_grad(|g, ids| g.matmul(ids[0], ids[1]), &[a, b], 1e-6, 1e-4)
}

#[test]
fn test_matmul_grad_check_row_times_column() -> Result<(), GradCheckError> {
    // Shapes of the linear model: x (1, 3) . w (3, 1).
    let x = Tensor::new(vec![1.0, 0.35, 0.8], vec![1, 3])?;
    let w = Tensor::new(vec![0.05, -0.02, 0.09], vec![3, 1])?;
    check_grad(|g, ids| g.matmul(ids[0], ids[1]), &[x, w], 1e-6, 1e-4)
}

#[test]
fn test_matmul_grad_check_vector_operands() -> Result<(), GradCheckError> {
    let m = Tensor::new(vec![0.5, 1.5, -2.0, 0.25], vec![2, 2])?;
    let v = Tensor::from_slice(&[0.3, -0.8]);
    check_grad(|g, ids| g.matmul(ids[0], ids[1]), &[m.clone(), v.clone()], 1e-6, 1e-4)?;
    check_grad(|g, ids| g.matmul(ids[1], ids[0]), &[m, v.clone()], 1e-6, 1e-4)?;
    check_grad(|g, ids| g.matmul(ids[0], ids[1]), &[v.clone(), v], 1e-6, 1e-4)
}
