use crate::autograd::graph::Graph;
use crate::autograd::node::{NodeId, Op};
use crate::error::LinogradError;
use crate::ops::arithmetic::{add, div, mul, pow, sub};
use crate::ops::linalg::matmul;
use crate::tensor::Tensor;

/// Defines the interface for the backward pass of a differentiable operation.
///
/// Given the gradient flowing into the output of the operation
/// (`grad_output`), `backward` returns the local contribution for each input,
/// in the order returned by `inputs`. Contributions of elementwise ops keep the
/// broadcast output shape; the accumulator sums them down to each input's
/// shape.
pub trait BackwardOp {
    fn backward(&self, graph: &Graph, grad_output: &Tensor) -> Result<Vec<Tensor>, LinogradError>;

    /// Handles of the operation's inputs, in operand order.
    fn inputs(&self) -> Vec<NodeId>;
}

impl BackwardOp for Op {
    fn backward(&self, graph: &Graph, grad_output: &Tensor) -> Result<Vec<Tensor>, LinogradError> {
        match *self {
            Op::Leaf => Ok(Vec::new()),
            Op::Add(_, _) => add::add_backward(grad_output),
            Op::Sub(_, _) => sub::sub_backward(grad_output),
            Op::Mul(a, b) => mul::mul_backward(graph.value(a)?, graph.value(b)?, grad_output),
            Op::Div(a, b) => div::div_backward(graph.value(a)?, graph.value(b)?, grad_output),
            Op::Pow(a, exponent) => pow::pow_backward(graph.value(a)?, exponent, grad_output),
            Op::MatMul(a, b) => {
                matmul::matmul_backward(graph.value(a)?, graph.value(b)?, grad_output)
            }
        }
    }

    fn inputs(&self) -> Vec<NodeId> {
        self.parents().collect()
    }
}
