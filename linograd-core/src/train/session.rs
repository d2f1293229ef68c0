use crate::autograd::{Checkpoint, Graph, NodeId};
use crate::error::LinogradError;
use crate::nn::{squared_error, Linear};
use crate::optim::{Optimizer, Sgd};
use crate::tensor::Tensor;
use crate::train::config::TrainConfig;
use crate::train::metrics::{mean_absolute_error, root_mean_squared_error};
use crate::train::report::{EpochSummary, Evaluation};
use crate::train::sample::Sample;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Owns everything one training run needs.
///
/// The parameter leaves are the first nodes of the arena and the checkpoint
/// sits right after them, so every step and every prediction can discard its
/// ephemeral nodes with a single rewind.
#[derive(Debug)]
pub struct TrainingSession {
    graph: Graph,
    model: Linear,
    optimizer: Sgd,
    config: TrainConfig,
    checkpoint: Checkpoint,
    rng: StdRng,
}

impl TrainingSession {
    /// A matrix model with `in_features` inputs, randomly initialised from
    /// `config.seed`.
    pub fn new(config: TrainConfig, in_features: usize) -> Result<Self, LinogradError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut graph = Graph::new();
        let model = Linear::new(
            &mut graph,
            in_features,
            config.initializer,
            config.init_scale,
            &mut rng,
        )?;
        Self::assemble(config, graph, model, rng)
    }

    /// A scalar model `w * x + b` starting from the given values.
    pub fn with_scalar_parameters(
        config: TrainConfig,
        weight: f64,
        bias: f64,
    ) -> Result<Self, LinogradError> {
        config.validate()?;
        let rng = StdRng::seed_from_u64(config.seed);
        let mut graph = Graph::new();
        let model = Linear::scalar(&mut graph, weight, bias);
        Self::assemble(config, graph, model, rng)
    }

    fn assemble(
        config: TrainConfig,
        graph: Graph,
        model: Linear,
        rng: StdRng,
    ) -> Result<Self, LinogradError> {
        let optimizer = Sgd::new(config.learning_rate)?;
        let checkpoint = graph.checkpoint();
        Ok(TrainingSession {
            graph,
            model,
            optimizer,
            config,
            checkpoint,
            rng,
        })
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    pub fn model(&self) -> &Linear {
        &self.model
    }

    pub fn optimizer(&self) -> &Sgd {
        &self.optimizer
    }

    /// The arena as left by the last step: only the parameter leaves.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn weights(&self) -> Result<&Tensor, LinogradError> {
        self.graph.value(self.model.weight())
    }

    pub fn bias(&self) -> Result<&Tensor, LinogradError> {
        self.graph.value(self.model.bias())
    }

    /// Runs `f` and rewinds the arena to the parameter checkpoint, whether or
    /// not `f` succeeded.
    fn scoped<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, LinogradError>,
    ) -> Result<T, LinogradError> {
        let result = f(self);
        self.graph.rewind(self.checkpoint);
        result
    }

    /// Builds `prediction` and `loss` nodes for one sample.
    fn forward(&mut self, sample: &Sample) -> Result<(NodeId, NodeId), LinogradError> {
        let input = self.model.input(&mut self.graph, &sample.features)?;
        let prediction = self.model.forward(&mut self.graph, input)?;
        let target = self.graph.scalar(sample.target);
        let loss = squared_error(&mut self.graph, prediction, target)?;
        Ok((prediction, loss))
    }

    /// Forward, backward and one optimizer step on a single sample. Returns
    /// the loss before the update.
    pub fn train_step(&mut self, sample: &Sample) -> Result<f64, LinogradError> {
        let result = self.scoped(|session| {
            let (_, loss) = session.forward(sample)?;
            let loss_value = session.graph.value(loss)?.sum();
            session.graph.backward(loss)?;
            session
                .optimizer
                .step(&mut session.graph, &session.model.parameters())?;
            Ok(loss_value)
        });
        if result.is_err() {
            for param in self.model.parameters() {
                self.graph.zero_grad(param)?;
            }
        }
        result
    }

    /// One pass over `samples`, shuffled when the config asks for it.
    /// Returns the average loss.
    pub fn train_epoch(&mut self, samples: &[Sample]) -> Result<f64, LinogradError> {
        let mut order: Vec<usize> = (0..samples.len()).collect();
        if self.config.shuffle {
            order.shuffle(&mut self.rng);
        }
        self.train_epoch_in_order(samples, &order)
    }

    /// One pass visiting `samples` in the given index order.
    ///
    /// Every index is checked before the first step, so a bad order leaves
    /// the parameters untouched.
    pub fn train_epoch_in_order(
        &mut self,
        samples: &[Sample],
        order: &[usize],
    ) -> Result<f64, LinogradError> {
        if order.is_empty() {
            return Err(LinogradError::EmptyDataset {
                operation: "train_epoch".to_string(),
            });
        }
        if let Some(&index) = order.iter().find(|&&i| i >= samples.len()) {
            return Err(LinogradError::IndexOutOfBounds {
                index,
                len: samples.len(),
            });
        }
        let mut total = 0.0;
        for &index in order {
            total += self.train_step(&samples[index])?;
        }
        Ok(total / order.len() as f64)
    }

    /// Trains for `config.epochs` epochs.
    pub fn fit(&mut self, samples: &[Sample]) -> Result<Vec<EpochSummary>, LinogradError> {
        let mut history = Vec::with_capacity(self.config.epochs);
        for epoch in 1..=self.config.epochs {
            let summary = EpochSummary {
                epoch,
                average_loss: self.train_epoch(samples)?,
            };
            if !summary.average_loss.is_finite() {
                warn!(
                    "Epoch {}: average loss is {}; the learning rate {} may be too large",
                    epoch, summary.average_loss, self.config.learning_rate
                );
            }
            if epoch % self.config.log_every == 0 {
                info!("{}", summary);
            } else {
                debug!("{}", summary);
            }
            history.push(summary);
        }
        Ok(history)
    }

    /// Prediction for one feature vector. Leaves the parameters untouched.
    pub fn predict(&mut self, features: &[f64]) -> Result<f64, LinogradError> {
        self.scoped(|session| {
            let input = session.model.input(&mut session.graph, features)?;
            let prediction = session.model.forward(&mut session.graph, input)?;
            session.graph.value(prediction)?.item()
        })
    }

    /// Loss and error metrics over `samples` without training.
    pub fn evaluate(&mut self, samples: &[Sample]) -> Result<Evaluation, LinogradError> {
        if samples.is_empty() {
            return Err(LinogradError::EmptyDataset {
                operation: "evaluate".to_string(),
            });
        }
        let mut total_loss = 0.0;
        let mut predictions = Vec::with_capacity(samples.len());
        for sample in samples {
            let (prediction, loss) = self.scoped(|session| {
                let (prediction, loss) = session.forward(sample)?;
                Ok((
                    session.graph.value(prediction)?.item()?,
                    session.graph.value(loss)?.sum(),
                ))
            })?;
            total_loss += loss;
            predictions.push(prediction);
        }
        let actuals: Vec<f64> = samples.iter().map(|s| s.target).collect();
        Ok(Evaluation {
            average_loss: total_loss / samples.len() as f64,
            mae: mean_absolute_error(&predictions, &actuals)?,
            rmse: root_mean_squared_error(&predictions, &actuals)?,
            predictions,
            actuals,
        })
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
