use crate::autograd::graph::Graph;
use crate::autograd::node::NodeId;
use crate::error::LinogradError;
use crate::tensor::Tensor;
use approx::abs_diff_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical {analytical_grad} != numerical {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(LinogradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(LinogradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Tensor error during intermediate calculation: {0}")]
    TensorError(LinogradError),
}

impl From<LinogradError> for GradCheckError {
    fn from(err: LinogradError) -> Self {
        GradCheckError::TensorError(err)
    }
}

/// Checks analytical gradients against centered finite differences.
///
/// `func` builds a graph from one leaf per entry of `inputs` and returns its
/// output node. The scalar being differentiated is the sum of the output's
/// elements, matching the all-ones seed of the backward pass.
pub fn check_grad<F>(
    func: F,
    inputs: &[Tensor],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, LinogradError>,
{
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs.iter().map(|t| graph.leaf(t.clone())).collect();
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    graph
        .backward(output)
        .map_err(GradCheckError::BackwardPassError)?;

    for (input_index, &leaf) in leaves.iter().enumerate() {
        let analytical = graph
            .grad(leaf)
            .map_err(GradCheckError::BackwardPassError)?
            .clone();

        for element_index in 0..inputs[input_index].numel() {
            let loss_plus = perturbed_loss(&func, inputs, input_index, element_index, epsilon)?;
            let loss_minus = perturbed_loss(&func, inputs, input_index, element_index, -epsilon)?;
            let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
            if !numerical.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index,
                    element_index,
                    loss_plus,
                    loss_minus,
                });
            }

            let analytical_grad = analytical.data()[element_index];
            if !abs_diff_eq!(analytical_grad, numerical, epsilon = tolerance) {
                return Err(GradCheckError::GradientMismatch {
                    input_index,
                    element_index,
                    analytical_grad,
                    numerical_grad: numerical,
                    difference: (analytical_grad - numerical).abs(),
                });
            }
        }
    }
    Ok(())
}

/// Sum of the output with one input element shifted by `delta`.
fn perturbed_loss<F>(
    func: &F,
    inputs: &[Tensor],
    input_index: usize,
    element_index: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, LinogradError>,
{
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let mut value = t.clone();
            if i == input_index {
                value.data[element_index] += delta;
            }
            graph.leaf(value)
        })
        .collect();
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    let value = graph.value(output).map_err(GradCheckError::ForwardPassError)?;
    Ok(value.sum())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
