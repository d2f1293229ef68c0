use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use approx::assert_relative_eq;

#[test]
fn test_div_forward_and_backward() -> Result<(), LinogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(Tensor::from_slice(&[6.0, 1.0]));
    let b = graph.leaf(Tensor::from_slice(&[3.0, 4.0]));
    let c = div_op(&mut graph, a, b)?;
    assert_eq!(graph.value(c)?.data(), &[2.0, 0.25]);

    graph.backward(c)?;
    assert_relative_eq!(graph.grad(a)?.data(), &[1.0 / 3.0, 0.25][..], epsilon = 1e-12);
    assert_relative_eq!(graph.grad(b)?.data(), &[-6.0 / 9.0, -1.0 / 16.0][..], epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_div_by_zero_propagates_infinity() -> Result<(), LinogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(Tensor::scalar(1.0));
    let b = graph.leaf(Tensor::scalar(0.0));
    let c = graph.div(a, b)?;
    assert!(graph.value(c)?.item()?.is_infinite());
    graph.backward(c)?;
    assert!(graph.grad(a)?.item()?.is_infinite());
    Ok(())
}

#[test]
fn test_div_grad_check() -> Result<(), GradCheckError> {
    let a = Tensor::new(vec![0.7, -1.3, 2.2, 0.4], vec![2, 2])?;
    let b = Tensor::new(vec![1.5, -2.5], vec![2, 1])?;
    check_grad(|g, ids| g.div(ids[0], ids[1]), &[a, b], 1e-6, 1e-4)
}
