//! The linear predictor and its loss.

pub mod linear;
pub mod loss;

pub use linear::{Initializer, Linear};
pub use loss::squared_error;
