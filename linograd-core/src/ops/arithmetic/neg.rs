// src/ops/arithmetic/neg.rs

use crate::autograd::{Graph, NodeId};
use crate::error::LinogradError;
use crate::ops::arithmetic::mul_op;

/// `-a`, recorded as `a * (-1)` against a fresh scalar leaf. It has no
/// backward rule of its own.
pub fn neg_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, LinogradError> {
    graph.value(a)?;
    let minus_one = graph.scalar(-1.0);
    mul_op(graph, a, minus_one)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
