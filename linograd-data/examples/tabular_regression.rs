//! # Income regression on a gender/age/height table
//!
//! Reads a CSV with the columns `Gender`, `Age`, `Height (cm)` and
//! `Income (USD)`, maps `male`/`female` to 1/0, scales every column by its
//! maximum and fits `income = x . w + b` with a `(3, 1)` weight.
//! The data is split 80/20; the report covers both parts and lists the
//! worst test predictions.
//!
//! ## Running
//! `cargo run --release --example tabular_regression -- gender.csv --epochs 50 --learning-rate 0.01`

use linograd_core::train::{threshold_accuracy, worst_predictions, Evaluation};
use linograd_core::{Sample, TrainConfig, TrainingSession};
use linograd_data::tabular::load_table;
use linograd_data::{train_test_split, TabularSpec};
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

const FEATURES: [&str; 3] = ["Gender", "Age", "Height (cm)"];
const TARGET: &str = "Income (USD)";
const TEST_RATIO: f64 = 0.2;
const WORST_EXAMPLES: usize = 3;

/// Fits income from gender, age and height
#[derive(Parser, Debug)]
#[command(name = "tabular_regression")]
#[command(about, long_about = None)]
struct Args {
    /// CSV file with a header row
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Number of passes over the training split
    #[arg(short, long, default_value_t = 50)]
    epochs: usize,

    /// Gradient descent step size
    #[arg(short, long, default_value_t = 0.01)]
    learning_rate: f64,
}

fn report(name: &str, evaluation: &Evaluation, threshold: f64) -> Result<(), Box<dyn Error>> {
    println!("{} Loss (MSE): {:.6}", name, evaluation.average_loss);
    println!("{} MAE: {:.6}", name, evaluation.mae);
    println!("{} RMSE: {:.6}", name, evaluation.rmse);
    let (accuracy, _) = threshold_accuracy(&evaluation.predictions, &evaluation.actuals, threshold)?;
    println!("{} Accuracy (within {}): {:.2}%", name, threshold, accuracy);
    Ok(())
}

fn show_examples(samples: &[Sample], evaluation: &Evaluation) -> Result<(), Box<dyn Error>> {
    println!("\nTop {} Worst Predictions:", WORST_EXAMPLES);
    println!("{}", "-".repeat(70));
    let worst = worst_predictions(&evaluation.predictions, &evaluation.actuals, WORST_EXAMPLES)?;
    for (rank, &idx) in worst.iter().enumerate() {
        let features = &samples[idx].features;
        let predicted = evaluation.predictions[idx];
        let actual = evaluation.actuals[idx];
        let error = (predicted - actual).abs();
        println!("\nExample {}:", rank + 1);
        println!(
            "  Input: Gender={:.0}, Age={:.4}, Height={:.4}",
            features[0], features[1], features[2]
        );
        println!("  Predicted: {:.6}", predicted);
        println!("  Actual: {:.6}", actual);
        println!("  Error: {:.6} ({:.2}% off)", error, error / actual * 100.0);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = TrainConfig::default()
        .with_epochs(args.epochs)
        .with_learning_rate(args.learning_rate);

    let spec = TabularSpec::new(&FEATURES, TARGET)
        .with_categories("Gender", &[("male", 1.0), ("female", 0.0)]);
    let samples = load_table(&args.path, &spec)?;
    let (train, test) = train_test_split(&samples, TEST_RATIO, config.seed)?;

    let threshold = config.accuracy_threshold;
    let mut session = TrainingSession::new(config, FEATURES.len())?;
    println!("Training...");
    session.fit(&train)?;

    println!("\nFinal weights: {:?}", session.weights()?.data());
    println!("Final bias: {:.6}", session.bias()?.item()?);

    println!("\n{}", "=".repeat(50));
    println!("Evaluation on Test Set:");
    println!("{}", "=".repeat(50));
    let test_eval = session.evaluate(&test)?;
    report("Test", &test_eval, threshold)?;

    let train_eval = session.evaluate(&train)?;
    println!();
    report("Train", &train_eval, threshold)?;

    println!("\nTrain samples: {}, Test samples: {}", train.len(), test.len());
    show_examples(&test, &test_eval)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_require_path() {
        assert!(Args::try_parse_from(["tabular_regression"]).is_err());
    }

    #[test]
    fn test_args_defaults_match_config() {
        let args = Args::try_parse_from(["tabular_regression", "gender.csv"]).unwrap();
        let config = TrainConfig::default();
        assert_eq!(args.path, PathBuf::from("gender.csv"));
        assert_eq!(args.epochs, config.epochs);
        assert_eq!(args.learning_rate, config.learning_rate);
    }

    #[test]
    fn test_args_short_flags() {
        let args =
            Args::try_parse_from(["tabular_regression", "gender.csv", "-e", "5", "-l", "0.5"]).unwrap();
        assert_eq!(args.epochs, 5);
        assert_eq!(args.learning_rate, 0.5);
    }
}
