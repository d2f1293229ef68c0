// src/ops/linalg/matmul.rs

use crate::autograd::{Graph, NodeId, Op};
use crate::error::LinogradError;
use crate::tensor::{matrix_dims, Tensor};

/// Matrix product of two rank 1 or 2 nodes (numpy `dot` semantics).
///
/// Fails with `DimensionMismatch` when the inner dimensions differ and with
/// `RankMismatch` for operands of any other rank; both are detected before
/// the product is computed.
pub fn matmul_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, LinogradError> {
    let value = graph.value(a)?.matmul(graph.value(b)?)?;
    Ok(graph.push(value, Op::MatMul(a, b)))
}

/// d(a . b) = (g . b^T, a^T . g)
///
/// Vector operands are viewed as a row (`a`) or a column (`b`) so the rule
/// is always computed on matrices, then each gradient takes its operand's
/// shape back.
pub(crate) fn matmul_backward(
    a: &Tensor,
    b: &Tensor,
    grad_output: &Tensor,
) -> Result<Vec<Tensor>, LinogradError> {
    let (m, n) = matrix_dims(a, true)?;
    let (_, p) = matrix_dims(b, false)?;
    let a_mat = a.reshape(&[m, n])?;
    let b_mat = b.reshape(&[n, p])?;
    let g_mat = grad_output.reshape(&[m, p])?;

    let grad_a = g_mat.matmul(&b_mat.transpose()?)?.reshape(a.shape())?;
    let grad_b = a_mat.transpose()?.matmul(&g_mat)?.reshape(b.shape())?;
    Ok(vec![grad_a, grad_b])
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
