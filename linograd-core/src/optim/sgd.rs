use crate::autograd::{Graph, NodeId};
use crate::error::LinogradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::train::config::ensure_positive_finite;
use log::{debug, warn};

/// Plain stochastic gradient descent with a fixed learning rate:
/// `value <- value - learning_rate * grad`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    learning_rate: f64,
}

impl Sgd {
    /// Fails with `InvalidConfig` unless `learning_rate` is finite and
    /// strictly positive.
    pub fn new(learning_rate: f64) -> Result<Self, LinogradError> {
        ensure_positive_finite("learning_rate", learning_rate)?;
        Ok(Sgd { learning_rate })
    }
}

impl Optimizer for Sgd {
    fn adjust(&self, graph: &mut Graph, node: NodeId) -> Result<(), LinogradError> {
        let target = graph.node_mut(node)?;
        if !target.is_leaf() {
            warn!(
                "Sgd::adjust called on non-leaf node {} ({}); the update will not survive a rebuild",
                node,
                target.op().name()
            );
        }
        target.value.sub_scaled_(self.learning_rate, &target.grad)?;
        target.grad.fill_zero_();
        debug!("Sgd::adjust {} -> {}", node, target.value);
        Ok(())
    }

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
