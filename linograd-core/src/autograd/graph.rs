use crate::autograd::node::{Node, NodeId, Op};
use crate::error::LinogradError;
use crate::ops;
use crate::tensor::Tensor;

/// Arena owning every node of a computation graph.
///
/// Nodes are appended by the op builders and addressed by [`NodeId`]. A
/// parent always has a smaller handle than its children, so the arena is
/// acyclic by construction.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
}

/// Arena length recorded by [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

impl Graph {
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Wraps a value as a leaf node with a zero gradient.
    pub fn leaf(&mut self, value: Tensor) -> NodeId {
        self.push(value, Op::Leaf)
    }

    /// Wraps a plain number as a rank-0 leaf node.
    pub fn scalar(&mut self, value: f64) -> NodeId {
        self.leaf(Tensor::scalar(value))
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, LinogradError> {
        self.nodes.get(id.0).ok_or(LinogradError::InvalidNode {
            index: id.0,
            len: self.nodes.len(),
        })
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, LinogradError> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.0)
            .ok_or(LinogradError::InvalidNode { index: id.0, len })
    }

    pub fn value(&self, id: NodeId) -> Result<&Tensor, LinogradError> {
        self.node(id).map(Node::value)
    }

    pub fn grad(&self, id: NodeId) -> Result<&Tensor, LinogradError> {
        self.node(id).map(Node::grad)
    }

    pub fn is_leaf(&self, id: NodeId) -> Result<bool, LinogradError> {
        self.node(id).map(Node::is_leaf)
    }

    /// Replaces the value of a node. The new value must keep the node's shape.
    pub fn set_value(&mut self, id: NodeId, value: Tensor) -> Result<(), LinogradError> {
        let node = self.node_mut(id)?;
        if node.value.shape() != value.shape() {
            return Err(LinogradError::ShapeMismatch {
                expected: node.value.shape().to_vec(),
                actual: value.shape().to_vec(),
                operation: "set_value".to_string(),
            });
        }
        node.value = value;
        Ok(())
    }

    /// Resets the gradient of `id` to zeros of its shape.
    pub fn zero_grad(&mut self, id: NodeId) -> Result<(), LinogradError> {
        self.node_mut(id)?.grad.fill_zero_();
        Ok(())
    }

    /// Marks the current end of the arena.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.nodes.len())
    }

    /// Drops every node created after `checkpoint`. Handles issued after the
    /// checkpoint become invalid.
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.nodes.truncate(checkpoint.0);
    }

    /// Appends a node. Parents must already exist in the arena.
    pub(crate) fn push(&mut self, value: Tensor, op: Op) -> NodeId {
        let id = NodeId(self.nodes.len());
        debug_assert!(op.parents().all(|p| p < id), "parent handle {:?} not below {:?}", op, id);
        self.nodes.push(Node::new(value, op));
        id
    }

    pub fn add(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, LinogradError> {
        ops::arithmetic::add_op(self, a, b)
    }

    pub fn sub(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, LinogradError> {
        ops::arithmetic::sub_op(self, a, b)
    }

    pub fn mul(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, LinogradError> {
        ops::arithmetic::mul_op(self, a, b)
    }

    pub fn div(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, LinogradError> {
        ops::arithmetic::div_op(self, a, b)
    }

    pub fn pow(&mut self, a: NodeId, exponent: f64) -> Result<NodeId, LinogradError> {
        ops::arithmetic::pow_op(self, a, exponent)
    }

    pub fn neg(&mut self, a: NodeId) -> Result<NodeId, LinogradError> {
        ops::arithmetic::neg_op(self, a)
    }

    pub fn matmul(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, LinogradError> {
        ops::linalg::matmul_op(self, a, b)
    }

    /// Runs the backward pass from `root`. See [`crate::autograd::backward`].
    pub fn backward(&mut self, root: NodeId) -> Result<(), LinogradError> {
        crate::autograd::backward::backward(self, root)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Orders every node reachable from `root` so that each parent precedes all
/// of its descendants. Each node appears once, however many paths reach it.
///
/// Depth-first postorder with an explicit stack; the visited marks are a flat
/// vector indexed by handle.
pub fn topological_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, LinogradError> {
    graph.node(root)?;
    let mut marks = vec![Mark::Unvisited; root.0 + 1];
    let mut sorted = Vec::new();
    let mut stack = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            marks[id.0] = Mark::Done;
            sorted.push(id);
            continue;
        }
        match marks[id.0] {
            Mark::Done => continue,
            Mark::InProgress => return Err(LinogradError::CycleDetected { index: id.0 }),
            Mark::Unvisited => {}
        }
        marks[id.0] = Mark::InProgress;
        stack.push((id, true));

        let parents: Vec<NodeId> = graph.node(id)?.parents().collect();
        for parent in parents.into_iter().rev() {
            if parent >= id {
                return Err(LinogradError::CycleDetected { index: id.0 });
            }
            match marks[parent.0] {
                Mark::Unvisited => stack.push((parent, false)),
                Mark::InProgress => return Err(LinogradError::CycleDetected { index: parent.0 }),
                Mark::Done => {}
            }
        }
    }
    Ok(sorted)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
