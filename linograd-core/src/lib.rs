//! Reverse-mode automatic differentiation for training linear predictors.
//!
//! Values live in a [`Graph`] arena. Forward operations append nodes that
//! remember which backward rule produced them; [`Graph::backward`] then
//! propagates gradients from a scalar loss to every ancestor, and an
//! [`optim::Optimizer`] applies gradient descent to the parameter leaves.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod tensor;
pub mod train;

pub use autograd::{Graph, NodeId};
pub use error::LinogradError;
pub use tensor::Tensor;
pub use train::{Sample, TrainConfig, TrainingSession};
