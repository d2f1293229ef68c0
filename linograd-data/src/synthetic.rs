//! Generator for noiseless linear data in the `x:y` record format.

use crate::error::DataError;
use log::info;
use std::fs;
use std::path::Path;

/// `(x, slope * x + offset)` for `x = 0, 1, ..., count - 1`.
pub fn linear_records(count: usize, slope: f64, offset: f64) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            (x, slope * x + offset)
        })
        .collect()
}

/// Formats records one per line as `x<delimiter>y`.
pub fn format_records(records: &[(f64, f64)], delimiter: char) -> String {
    let mut out = String::new();
    for (x, y) in records {
        out.push_str(&format!("{}{}{}\n", x, delimiter, y));
    }
    out
}

pub fn write_records<P: AsRef<Path>>(
    path: P,
    records: &[(f64, f64)],
    delimiter: char,
) -> Result<(), DataError> {
    let path = path.as_ref();
    fs::write(path, format_records(records, delimiter)).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} records to {:?}", records.len(), path);
    Ok(())
}

#[cfg(test)]
#[path = "synthetic_test.rs"]
mod tests;
