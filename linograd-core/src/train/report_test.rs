use super::*;

#[test]
fn test_epoch_summary_display() {
    let summary = EpochSummary {
        epoch: 10,
        average_loss: 0.0012341,
    };
    assert_eq!(summary.to_string(), "Epoch 10: Average Loss = 0.001234");
}

#[test]
fn test_evaluation_display_and_helpers() {
    let evaluation = Evaluation {
        average_loss: 0.25,
        mae: 0.5,
        rmse: 0.5,
        predictions: vec![1.0, 2.0],
        actuals: vec![1.05, 3.0],
    };
    assert_eq!(
        evaluation.to_string(),
        "Loss (MSE): 0.250000\nMAE: 0.500000\nRMSE: 0.500000"
    );
    assert_eq!(evaluation.len(), 2);
    assert_eq!(evaluation.accuracy(0.1).unwrap(), 50.0);
    assert_eq!(evaluation.worst(1).unwrap(), vec![1]);
}
