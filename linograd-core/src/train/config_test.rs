use super::*;

#[test]
fn test_default_is_valid() {
    let config = TrainConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.epochs, 50);
    assert_eq!(config.log_every, 10);
    assert_eq!(config.accuracy_threshold, 0.1);
    assert!(!config.shuffle);
}

#[test]
fn test_setters_chain() {
    let config = TrainConfig::default()
        .with_learning_rate(1e-4)
        .with_epochs(5)
        .with_log_every(1)
        .with_accuracy_threshold(0.5)
        .with_seed(7)
        .with_initializer(Initializer::Normal)
        .with_init_scale(0.2)
        .with_shuffle(true);
    assert_eq!(config.learning_rate, 1e-4);
    assert_eq!(config.epochs, 5);
    assert_eq!(config.log_every, 1);
    assert_eq!(config.accuracy_threshold, 0.5);
    assert_eq!(config.seed, 7);
    assert_eq!(config.initializer, Initializer::Normal);
    assert_eq!(config.init_scale, 0.2);
    assert!(config.shuffle);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_values() {
    let bad = [
        TrainConfig::default().with_learning_rate(0.0),
        TrainConfig::default().with_learning_rate(f64::NAN),
        TrainConfig::default().with_init_scale(-1.0),
        TrainConfig::default().with_accuracy_threshold(-0.1),
        TrainConfig::default().with_epochs(0),
        TrainConfig::default().with_log_every(0),
    ];
    for config in bad.iter() {
        assert!(
            matches!(config.validate(), Err(LinogradError::InvalidConfig(_))),
            "{:?} passed validation",
            config
        );
    }
}

#[test]
fn test_ensure_positive_finite_generic() {
    assert!(ensure_positive_finite("x", 0.5f32).is_ok());
    assert!(ensure_positive_finite("x", f32::INFINITY).is_err());
    assert!(ensure_positive_finite("x", -2.0f64).is_err());
}
