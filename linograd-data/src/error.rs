use linograd_core::LinogradError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or preparing data.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read or write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `line` is 1-based.
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Column {0:?} not found in the header")]
    MissingColumn(String),

    #[error("Unknown category {value:?} in column {column:?} (line {line})")]
    UnknownCategory {
        column: String,
        value: String,
        line: usize,
    },

    #[error("Invalid split: {0}")]
    InvalidSplit(String),

    #[error("Index {index} out of bounds for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error(transparent)]
    Core(#[from] LinogradError),
}
