use crate::error::LinogradError;
use crate::nn::Initializer;
use num_traits::Float;
use std::fmt::Display;

/// Hyper-parameters of a training run.
///
/// Built with [`Default`] and the chained `with_*` setters; checked by
/// [`TrainConfig::validate`] when a session is created.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    /// Log an epoch summary every this many epochs.
    pub log_every: usize,
    /// Largest absolute error still counted as a hit by the accuracy metric.
    pub accuracy_threshold: f64,
    /// Seeds parameter initialisation and epoch shuffling.
    pub seed: u64,
    pub initializer: Initializer,
    /// Upper bound of the uniform initialiser, standard deviation of the
    /// normal one.
    pub init_scale: f64,
    pub shuffle: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: 0.01,
            epochs: 50,
            log_every: 10,
            accuracy_threshold: 0.1,
            seed: 42,
            initializer: Initializer::Uniform,
            init_scale: 0.1,
            shuffle: false,
        }
    }
}

impl TrainConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    pub fn with_accuracy_threshold(mut self, threshold: f64) -> Self {
        self.accuracy_threshold = threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_initializer(mut self, initializer: Initializer) -> Self {
        self.initializer = initializer;
        self
    }

    pub fn with_init_scale(mut self, init_scale: f64) -> Self {
        self.init_scale = init_scale;
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn validate(&self) -> Result<(), LinogradError> {
        ensure_positive_finite("learning_rate", self.learning_rate)?;
        ensure_positive_finite("init_scale", self.init_scale)?;
        if !self.accuracy_threshold.is_finite() || self.accuracy_threshold < 0.0 {
            return Err(LinogradError::InvalidConfig(format!(
                "accuracy_threshold must be finite and non-negative, got {}",
                self.accuracy_threshold
            )));
        }
        if self.epochs == 0 {
            return Err(LinogradError::InvalidConfig(
                "epochs must be at least 1".to_string(),
            ));
        }
        if self.log_every == 0 {
            return Err(LinogradError::InvalidConfig(
                "log_every must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn ensure_positive_finite<F: Float + Display>(
    name: &str,
    value: F,
) -> Result<(), LinogradError> {
    if !value.is_finite() || value <= F::zero() {
        return Err(LinogradError::InvalidConfig(format!(
            "{} must be finite and positive, got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
