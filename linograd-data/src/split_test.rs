use super::*;
use std::collections::HashSet;

#[test]
fn test_split_sizes_and_coverage() {
    let items: Vec<usize> = (0..10).collect();
    let (train, test) = train_test_split(&items, 0.2, 42).unwrap();
    assert_eq!(train.len(), 8);
    assert_eq!(test.len(), 2);
    let all: HashSet<usize> = train.iter().chain(test.iter()).copied().collect();
    assert_eq!(all.len(), 10);
}

#[test]
fn test_split_rounds_test_size_up() {
    let items: Vec<usize> = (0..11).collect();
    let (train, test) = train_test_split(&items, 0.2, 0).unwrap();
    assert_eq!(test.len(), 3);
    assert_eq!(train.len(), 8);
}

#[test]
fn test_split_is_deterministic_per_seed() {
    let items: Vec<usize> = (0..50).collect();
    let first = train_test_split(&items, 0.3, 7).unwrap();
    let second = train_test_split(&items, 0.3, 7).unwrap();
    assert_eq!(first, second);
    let other = train_test_split(&items, 0.3, 8).unwrap();
    assert_ne!(first, other);
}

#[test]
fn test_split_rejects_bad_ratio() {
    let items = vec![1, 2, 3];
    for ratio in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
        assert!(matches!(
            train_test_split(&items, ratio, 0),
            Err(DataError::InvalidSplit(_))
        ));
    }
}

#[test]
fn test_split_rejects_too_few_items() {
    assert!(matches!(
        train_test_split(&[1], 0.5, 0),
        Err(DataError::InvalidSplit(_))
    ));
    assert!(matches!(
        train_test_split::<i32>(&[], 0.5, 0),
        Err(DataError::InvalidSplit(_))
    ));
}
