// src/ops/arithmetic/mul.rs

use crate::autograd::{Graph, NodeId, Op};
use crate::error::LinogradError;
use crate::tensor::Tensor;

/// Elementwise `a * b` with broadcasting.
pub fn mul_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, LinogradError> {
    let value = graph.value(a)?.zip_with(graph.value(b)?, |x, y| x * y)?;
    Ok(graph.push(value, Op::Mul(a, b)))
}

/// d(a * b) = (b * g, a * g)
pub(crate) fn mul_backward(
    a: &Tensor,
    b: &Tensor,
    grad_output: &Tensor,
) -> Result<Vec<Tensor>, LinogradError> {
    let grad_a = grad_output.zip_with(b, |g, b| b * g)?;
    let grad_b = grad_output.zip_with(a, |g, a| a * g)?;
    Ok(vec![grad_a, grad_b])
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
