use crate::autograd::{Graph, NodeId};
use crate::error::LinogradError;

/// Per-sample squared error `(target - prediction)^2`, elementwise.
pub fn squared_error(
    graph: &mut Graph,
    prediction: NodeId,
    target: NodeId,
) -> Result<NodeId, LinogradError> {
    let diff = graph.sub(target, prediction)?;
    graph.pow(diff, 2.0)
}

#[cfg(test)]
#[path = "loss_test.rs"]
mod tests;
