use crate::autograd::accumulate::accumulate_grad;
use crate::autograd::backward_op::BackwardOp;
use crate::autograd::graph::{topological_sort, Graph};
use crate::autograd::node::NodeId;
use crate::error::LinogradError;
use log::debug;

/// Computes the gradient of `root` with respect to every node it depends on.
///
/// The root gradient is seeded with ones of its shape (overwriting whatever it
/// held), then nodes are visited in reverse topological order and each
/// non-leaf node applies its backward rule exactly once, accumulating into its
/// parents' gradients.
pub fn backward(graph: &mut Graph, root: NodeId) -> Result<(), LinogradError> {
    let sorted_nodes = topological_sort(graph, root)?;
    debug!(
        "backward: {} reachable nodes from {} (arena holds {})",
        sorted_nodes.len(),
        root,
        graph.len()
    );

    let root_node = graph.node_mut(root)?;
    root_node.grad = root_node.value.ones_like();

    for &node_id in sorted_nodes.iter().rev() {
        let node = graph.node(node_id)?;
        if node.is_leaf() {
            continue;
        }
        let op = node.op();
        let upstream = node.grad().clone();

        let input_grads = op.backward(graph, &upstream)?;
        let input_ids = op.inputs();
        debug_assert_eq!(input_grads.len(), input_ids.len());

        for (input_id, grad) in input_ids.into_iter().zip(input_grads) {
            accumulate_grad(graph, input_id, grad)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
