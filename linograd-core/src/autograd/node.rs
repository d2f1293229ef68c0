use crate::tensor::Tensor;
use std::fmt;

/// Handle of a node inside a [`Graph`](super::Graph) arena.
///
/// Handles are only meaningful for the graph that issued them, and only until
/// that graph is rewound past them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.0)
    }
}

/// The operation that produced a node, together with its parent handles.
///
/// Carrying the parents inside the variant ties the arity to the tag: a
/// `Leaf` has no parents, `Pow` has one, every other op has two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Leaf,
    Add(NodeId, NodeId),
    Sub(NodeId, NodeId),
    Mul(NodeId, NodeId),
    Div(NodeId, NodeId),
    /// Elementwise power with a constant exponent.
    Pow(NodeId, f64),
    MatMul(NodeId, NodeId),
}

impl Op {
    /// Short name of the backward rule.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "none",
            Op::Add(..) => "add",
            Op::Sub(..) => "sub",
            Op::Mul(..) => "mul",
            Op::Div(..) => "div",
            Op::Pow(..) => "pow",
            Op::MatMul(..) => "matmul",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Pow(..) => 1,
            _ => 2,
        }
    }

    /// Parent handles in operand order.
    pub fn parents(&self) -> impl Iterator<Item = NodeId> {
        let pair = match *self {
            Op::Leaf => [None, None],
            Op::Pow(a, _) => [Some(a), None],
            Op::Add(a, b) | Op::Sub(a, b) | Op::Mul(a, b) | Op::Div(a, b) | Op::MatMul(a, b) => {
                [Some(a), Some(b)]
            }
        };
        pair.into_iter().flatten()
    }
}

/// One value in the computation graph.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) value: Tensor,
    /// Always the shape of `value`; zeros until the backward pass writes it.
    pub(crate) grad: Tensor,
    pub(crate) op: Op,
}

impl Node {
    pub(crate) fn new(value: Tensor, op: Op) -> Self {
        let grad = value.zeros_like();
        Node { value, grad, op }
    }

    pub fn value(&self) -> &Tensor {
        &self.value
    }

    pub fn grad(&self) -> &Tensor {
        &self.grad
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn is_leaf(&self) -> bool {
        self.op == Op::Leaf
    }

    pub fn parents(&self) -> impl Iterator<Item = NodeId> {
        self.op.parents()
    }
}
