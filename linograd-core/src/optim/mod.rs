// linograd-core/src/optim/mod.rs

//! Gradient-descent parameter updates.
//!
//! An optimizer mutates the values of leaf parameters in place from their
//! accumulated gradients and then clears those gradients.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
