//! Training loop around the autograd engine.
//!
//! [`TrainingSession`] owns the graph arena, the linear model's parameter
//! leaves, the optimizer and the [`TrainConfig`]. Each step builds the
//! forward graph for one sample on top of the parameters, runs the backward
//! pass, adjusts the parameters and rewinds the arena.

pub mod config;
pub mod metrics;
pub mod report;
pub mod sample;
pub mod session;

pub use config::TrainConfig;
pub use metrics::{mean_absolute_error, root_mean_squared_error, threshold_accuracy, worst_predictions};
pub use report::{EpochSummary, Evaluation};
pub use sample::Sample;
pub use session::TrainingSession;
