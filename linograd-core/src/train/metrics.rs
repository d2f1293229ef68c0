use crate::error::LinogradError;

fn check_pair(predictions: &[f64], actuals: &[f64], operation: &str) -> Result<(), LinogradError> {
    if predictions.len() != actuals.len() {
        return Err(LinogradError::ShapeMismatch {
            expected: vec![actuals.len()],
            actual: vec![predictions.len()],
            operation: operation.to_string(),
        });
    }
    if predictions.is_empty() {
        return Err(LinogradError::EmptyDataset {
            operation: operation.to_string(),
        });
    }
    Ok(())
}

/// `|prediction - actual|` per sample.
pub fn absolute_errors(predictions: &[f64], actuals: &[f64]) -> Result<Vec<f64>, LinogradError> {
    check_pair(predictions, actuals, "absolute_errors")?;
    Ok(predictions
        .iter()
        .zip(actuals)
        .map(|(p, a)| (p - a).abs())
        .collect())
}

pub fn mean_absolute_error(predictions: &[f64], actuals: &[f64]) -> Result<f64, LinogradError> {
    check_pair(predictions, actuals, "mean_absolute_error")?;
    let total: f64 = predictions.iter().zip(actuals).map(|(p, a)| (p - a).abs()).sum();
    Ok(total / predictions.len() as f64)
}

pub fn root_mean_squared_error(predictions: &[f64], actuals: &[f64]) -> Result<f64, LinogradError> {
    check_pair(predictions, actuals, "root_mean_squared_error")?;
    let total: f64 = predictions
        .iter()
        .zip(actuals)
        .map(|(p, a)| (a - p).powi(2))
        .sum();
    Ok((total / predictions.len() as f64).sqrt())
}

/// Percentage of predictions within `threshold` of their target, together
/// with the absolute error of every prediction.
pub fn threshold_accuracy(
    predictions: &[f64],
    actuals: &[f64],
    threshold: f64,
) -> Result<(f64, Vec<f64>), LinogradError> {
    let errors = absolute_errors(predictions, actuals)?;
    let hits = errors.iter().filter(|&&e| e <= threshold).count();
    Ok((hits as f64 / errors.len() as f64 * 100.0, errors))
}

/// Indices of the `k` largest absolute errors, largest first. NaN errors sort
/// ahead of every finite error.
pub fn worst_predictions(
    predictions: &[f64],
    actuals: &[f64],
    k: usize,
) -> Result<Vec<usize>, LinogradError> {
    let errors = absolute_errors(predictions, actuals)?;
    let mut indices: Vec<usize> = (0..errors.len()).collect();
    indices.sort_by(|&i, &j| errors[j].total_cmp(&errors[i]));
    indices.truncate(k);
    Ok(indices)
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;
