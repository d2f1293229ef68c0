// src/ops/arithmetic/pow.rs

use crate::autograd::{Graph, NodeId, Op};
use crate::error::LinogradError;
use crate::tensor::Tensor;

/// Raises every element of `a` to a constant `exponent`.
pub fn pow_op(graph: &mut Graph, a: NodeId, exponent: f64) -> Result<NodeId, LinogradError> {
    let value = graph.value(a)?.map(|x| x.powf(exponent));
    Ok(graph.push(value, Op::Pow(a, exponent)))
}

/// d(a^e) = g * e * a^(e - 1)
pub(crate) fn pow_backward(
    a: &Tensor,
    exponent: f64,
    grad_output: &Tensor,
) -> Result<Vec<Tensor>, LinogradError> {
    let grad_a = grad_output.zip_with(a, |g, a| g * exponent * a.powf(exponent - 1.0))?;
    Ok(vec![grad_a])
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
