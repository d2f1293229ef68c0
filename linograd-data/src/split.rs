use crate::error::DataError;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffles `items` with a seeded generator and splits them into
/// `(train, test)`.
///
/// The test set gets `ceil(len * test_ratio)` items. `test_ratio` must lie
/// strictly between 0 and 1, and both parts must end up non-empty.
pub fn train_test_split<T: Clone>(
    items: &[T],
    test_ratio: f64,
    seed: u64,
) -> Result<(Vec<T>, Vec<T>), DataError> {
    if !(test_ratio > 0.0 && test_ratio < 1.0) {
        return Err(DataError::InvalidSplit(format!(
            "test_ratio must be in (0, 1), got {}",
            test_ratio
        )));
    }
    let test_len = (items.len() as f64 * test_ratio).ceil() as usize;
    if test_len == 0 || test_len >= items.len() {
        return Err(DataError::InvalidSplit(format!(
            "{} items cannot be split with test_ratio {}",
            items.len(),
            test_ratio
        )));
    }

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.shuffle(&mut StdRng::seed_from_u64(seed));
    let (test_idx, train_idx) = order.split_at(test_len);
    let pick = |indices: &[usize]| indices.iter().map(|&i| items[i].clone()).collect::<Vec<T>>();
    debug!(
        "train_test_split: {} train, {} test (seed {})",
        train_idx.len(),
        test_idx.len(),
        seed
    );
    Ok((pick(train_idx), pick(test_idx)))
}

#[cfg(test)]
#[path = "split_test.rs"]
mod tests;
