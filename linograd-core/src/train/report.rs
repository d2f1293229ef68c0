use crate::error::LinogradError;
use crate::train::metrics::{threshold_accuracy, worst_predictions};
use std::fmt;

/// Average training loss of one epoch. Epochs are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochSummary {
    pub epoch: usize,
    pub average_loss: f64,
}

impl fmt::Display for EpochSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Epoch {}: Average Loss = {:.6}", self.epoch, self.average_loss)
    }
}

/// Result of running a model over a set of samples without training.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Mean squared error over the samples.
    pub average_loss: f64,
    pub mae: f64,
    pub rmse: f64,
    pub predictions: Vec<f64>,
    pub actuals: Vec<f64>,
}

impl Evaluation {
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// Percentage of predictions within `threshold` of their target.
    pub fn accuracy(&self, threshold: f64) -> Result<f64, LinogradError> {
        threshold_accuracy(&self.predictions, &self.actuals, threshold).map(|(acc, _)| acc)
    }

    /// Indices of the `k` worst predictions, largest error first.
    pub fn worst(&self, k: usize) -> Result<Vec<usize>, LinogradError> {
        worst_predictions(&self.predictions, &self.actuals, k)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Loss (MSE): {:.6}", self.average_loss)?;
        writeln!(f, "MAE: {:.6}", self.mae)?;
        write!(f, "RMSE: {:.6}", self.rmse)
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
