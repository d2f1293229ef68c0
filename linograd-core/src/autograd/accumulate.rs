use crate::autograd::graph::Graph;
use crate::autograd::node::NodeId;
use crate::error::LinogradError;
use crate::tensor::utils::squeeze_shape;
use crate::tensor::Tensor;

/// Reduces a gradient to `target_shape` by summing over the dimensions a
/// forward broadcast introduced.
///
/// 1. While the gradient has more dimensions than the target, sum over axis 0.
/// 2. For each remaining axis where the target has size 1 and the gradient
///    does not, sum along it keeping the dimension.
/// 3. Reshape to the target. Only size-1 dimensions may be added or removed
///    here; anything else is a `ShapeReductionFailure`.
pub fn reduce_to_shape(grad: Tensor, target_shape: &[usize]) -> Result<Tensor, LinogradError> {
    if grad.shape() == target_shape {
        return Ok(grad);
    }
    let failure = || LinogradError::ShapeReductionFailure {
        gradient: grad.shape().to_vec(),
        target: target_shape.to_vec(),
    };

    let mut reduced = grad.clone();
    while reduced.rank() > target_shape.len() {
        reduced = reduced.sum_axis(0, false)?;
    }

    if reduced.rank() == target_shape.len() {
        for (axis, &target_dim) in target_shape.iter().enumerate() {
            let dim = reduced.shape()[axis];
            if dim == target_dim {
                continue;
            }
            if target_dim != 1 {
                return Err(failure());
            }
            reduced = reduced.sum_axis(axis, true)?;
        }
    }

    if squeeze_shape(reduced.shape()) != squeeze_shape(target_shape) {
        return Err(failure());
    }
    reduced.reshape(target_shape).map_err(|_| failure())
}

/// Adds `contribution` into the gradient of `id`, reducing it to the node's
/// shape first. Gradients are summed, never overwritten, so a node reached
/// through several paths receives every contribution.
pub(crate) fn accumulate_grad(
    graph: &mut Graph,
    id: NodeId,
    contribution: Tensor,
) -> Result<(), LinogradError> {
    let node = graph.node_mut(id)?;
    let reduced = reduce_to_shape(contribution, node.value.shape())?;
    node.grad.add_(&reduced)
}

#[cfg(test)]
#[path = "accumulate_test.rs"]
mod tests;
