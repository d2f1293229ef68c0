// src/ops/arithmetic/div.rs

use crate::autograd::{Graph, NodeId, Op};
use crate::error::LinogradError;
use crate::tensor::Tensor;

/// Elementwise `a / b` with broadcasting.
///
/// Division by zero is not trapped: IEEE infinities and NaNs flow into the
/// result and on through the backward pass.
pub fn div_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, LinogradError> {
    let value = graph.value(a)?.zip_with(graph.value(b)?, |x, y| x / y)?;
    Ok(graph.push(value, Op::Div(a, b)))
}

/// d(a / b) = (g / b, -g * a / b^2)
pub(crate) fn div_backward(
    a: &Tensor,
    b: &Tensor,
    grad_output: &Tensor,
) -> Result<Vec<Tensor>, LinogradError> {
    let grad_a = grad_output.zip_with(b, |g, b| g / b)?;
    let grad_b = grad_output
        .zip_with(a, |g, a| g * a)?
        .zip_with(b, |ga, b| -ga / (b * b))?;
    Ok(vec![grad_a, grad_b])
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
