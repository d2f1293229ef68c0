use crate::autograd::{Graph, NodeId};
use crate::error::LinogradError;

/// Common interface of the optimizers.
///
/// Optimizers are responsible for updating parameter leaves based on the
/// gradients left in the graph by a backward pass.
pub trait Optimizer {
    /// Updates one node from its gradient and resets the gradient to zeros.
    ///
    /// Meant for leaf parameters. Adjusting a non-leaf node still applies the
    /// update, but the change is overwritten the next time the graph is
    /// rebuilt.
    fn adjust(&self, graph: &mut Graph, node: NodeId) -> Result<(), LinogradError>;

    /// Adjusts every parameter in `params`.
    fn step(&self, graph: &mut Graph, params: &[NodeId]) -> Result<(), LinogradError> {
        for &param in params {
            self.adjust(graph, param)?;
        }
        Ok(())
    }

    fn learning_rate(&self) -> f64;
}
