//! Data sources for linograd: in-memory datasets, loaders for the `x:y`
//! record format and for header-labelled CSV tables, a synthetic linear
//! generator, a seeded train/test split and index samplers.

pub mod datasets;
pub mod delimited;
pub mod error;
pub mod samplers;
pub mod split;
pub mod synthetic;
pub mod tabular;

pub use datasets::{Dataset, VecDataset};
pub use error::DataError;
pub use linograd_core::Sample;
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
pub use split::train_test_split;
pub use tabular::TabularSpec;
