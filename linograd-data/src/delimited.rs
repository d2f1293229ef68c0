//! Reader for the one-record-per-line `x<delimiter>y` text format.

use crate::error::DataError;
use linograd_core::{LinogradError, Sample};
use log::debug;
use std::fs;
use std::path::Path;

pub const DEFAULT_DELIMITER: char = ':';
/// Divisor applied to both values of the synthetic scalar dataset.
pub const DEFAULT_SCALE: f64 = 100_000.0;

/// Parses `x<delimiter>y` records, one per non-empty line, dividing both
/// values by `scale`.
pub fn parse_records(text: &str, delimiter: char, scale: f64) -> Result<Vec<Sample>, DataError> {
    if !scale.is_finite() || scale == 0.0 {
        return Err(LinogradError::InvalidConfig(format!(
            "record scale must be finite and non-zero, got {}",
            scale
        ))
        .into());
    }

    let mut samples = Vec::new();
    for (line_num, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = line_num + 1;
        let parts: Vec<&str> = line.split(delimiter).collect();
        if parts.len() != 2 {
            return Err(DataError::Parse {
                line: line_no,
                reason: format!(
                    "expected 2 fields separated by {:?}, found {}",
                    delimiter,
                    parts.len()
                ),
            });
        }
        let x = parse_number(parts[0], line_no)?;
        let y = parse_number(parts[1], line_no)?;
        samples.push(Sample::scalar(x / scale, y / scale));
    }
    Ok(samples)
}

/// Reads a file and parses it with [`parse_records`].
pub fn load_records<P: AsRef<Path>>(
    path: P,
    delimiter: char,
    scale: f64,
) -> Result<Vec<Sample>, DataError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let samples = parse_records(&contents, delimiter, scale)?;
    debug!("load_records: {} records from {:?}", samples.len(), path);
    Ok(samples)
}

pub(crate) fn parse_number(field: &str, line: usize) -> Result<f64, DataError> {
    let field = field.trim();
    field.parse::<f64>().map_err(|e| DataError::Parse {
        line,
        reason: format!("invalid number {:?}: {}", field, e),
    })
}

#[cfg(test)]
#[path = "delimited_test.rs"]
mod tests;
