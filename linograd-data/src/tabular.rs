//! Reader for comma-separated tables with a header row.
//!
//! Selected columns become the features and target of each [`Sample`].
//! Text columns are mapped to numbers through per-column category tables,
//! and every selected column can be scaled by its maximum.

use crate::delimited::parse_number;
use crate::error::DataError;
use linograd_core::Sample;
use log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Which columns to read and how to turn them into numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularSpec {
    pub features: Vec<String>,
    pub target: String,
    /// Column name to `category -> value` table. Cells are trimmed before
    /// the lookup.
    pub categories: HashMap<String, HashMap<String, f64>>,
    /// Divide every selected column by its maximum.
    pub normalize: bool,
}

impl TabularSpec {
    pub fn new(features: &[&str], target: &str) -> Self {
        TabularSpec {
            features: features.iter().map(|f| f.to_string()).collect(),
            target: target.to_string(),
            categories: HashMap::new(),
            normalize: true,
        }
    }

    pub fn with_categories(mut self, column: &str, mapping: &[(&str, f64)]) -> Self {
        let table = mapping
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect();
        self.categories.insert(column.to_string(), table);
        self
    }

    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Feature columns followed by the target column.
    fn columns(&self) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.target.as_str()))
    }
}

/// Divides every value by the column maximum. A column whose maximum is zero
/// is left unchanged.
pub fn normalize_by_max(column: &mut [f64]) {
    let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == 0.0 || !max.is_finite() {
        if max != 0.0 && !column.is_empty() {
            warn!("normalize_by_max: column maximum is {}; leaving it unscaled", max);
        }
        return;
    }
    for value in column.iter_mut() {
        *value /= max;
    }
}

pub fn parse_table(text: &str, spec: &TabularSpec) -> Result<Vec<Sample>, DataError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or(DataError::Parse {
        line: 1,
        reason: "missing header row".to_string(),
    })?;
    let names: Vec<&str> = header.split(',').map(str::trim).collect();
    let positions = spec
        .columns()
        .map(|column| {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or_else(|| DataError::MissingColumn(column.to_string()))
        })
        .collect::<Result<Vec<usize>, DataError>>()?;
    let selected: Vec<&str> = spec.columns().collect();

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); positions.len()];
    for (line_no, line) in lines {
        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() != names.len() {
            return Err(DataError::Parse {
                line: line_no,
                reason: format!("expected {} fields, found {}", names.len(), cells.len()),
            });
        }
        for ((column, &position), values) in selected.iter().zip(&positions).zip(&mut columns) {
            let cell = cells[position].trim();
            let value = match spec.categories.get(*column) {
                Some(table) => *table.get(cell).ok_or_else(|| DataError::UnknownCategory {
                    column: column.to_string(),
                    value: cell.to_string(),
                    line: line_no,
                })?,
                None => parse_number(cell, line_no)?,
            };
            values.push(value);
        }
    }

    if spec.normalize {
        for values in columns.iter_mut() {
            normalize_by_max(values);
        }
    }

    let (feature_columns, target_column) = columns.split_at(spec.features.len());
    let rows = target_column.first().map_or(0, Vec::len);
    let samples: Vec<Sample> = (0..rows)
        .map(|row| {
            let features = feature_columns.iter().map(|c| c[row]).collect();
            Sample::new(features, target_column[0][row])
        })
        .collect();
    debug!(
        "parse_table: {} rows, features {:?}, target {:?}",
        samples.len(),
        spec.features,
        spec.target
    );
    Ok(samples)
}

pub fn load_table<P: AsRef<Path>>(path: P, spec: &TabularSpec) -> Result<Vec<Sample>, DataError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&contents, spec)
}

#[cfg(test)]
#[path = "tabular_test.rs"]
mod tests;
