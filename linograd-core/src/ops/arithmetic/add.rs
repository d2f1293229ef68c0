// src/ops/arithmetic/add.rs

use crate::autograd::{Graph, NodeId, Op};
use crate::error::LinogradError;
use crate::tensor::Tensor;

/// Elementwise `a + b` with broadcasting.
pub fn add_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, LinogradError> {
    let value = graph.value(a)?.zip_with(graph.value(b)?, |x, y| x + y)?;
    Ok(graph.push(value, Op::Add(a, b)))
}

/// d(a + b) = (g, g)
pub(crate) fn add_backward(grad_output: &Tensor) -> Result<Vec<Tensor>, LinogradError> {
    Ok(vec![grad_output.clone(), grad_output.clone()])
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
