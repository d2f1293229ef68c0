//! # Scalar regression on `y = x - 1`
//!
//! Trains the scalar model `w * x + b` one sample at a time:
//! 1.  Loads `x:y` records from the path given as first argument, or
//!     generates 100000 of them in memory.
//! 2.  Scales every value down by 100000.
//! 3.  Runs the epochs, logging the average loss of each one.
//! 4.  Prints the predictions for a few raw inputs.
//!
//! ## Running
//! `cargo run --release --example scalar_regression -- [data.txt] --epochs 50 --learning-rate 1e-4`
//!
//! Set `RUST_LOG=debug` to see the per-step engine traces.

use linograd_core::{TrainConfig, TrainingSession};
use linograd_data::delimited::{load_records, parse_records, DEFAULT_DELIMITER, DEFAULT_SCALE};
use linograd_data::synthetic::{format_records, linear_records};
use clap::Parser;
use log::info;
use rand::Rng;
use std::error::Error;
use std::path::PathBuf;

const GENERATED_RECORDS: usize = 100_000;

/// Fits `w * x + b` to `x:y` records
#[derive(Parser, Debug)]
#[command(name = "scalar_regression")]
#[command(about, long_about = None)]
struct Args {
    /// `x:y` data file; generates records of `y = x - 1` when omitted
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Number of passes over the data
    #[arg(short, long, default_value_t = 50)]
    epochs: usize,

    /// Gradient descent step size
    #[arg(short, long, default_value_t = 1e-4)]
    learning_rate: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Args {
        path,
        epochs,
        learning_rate,
    } = Args::parse();

    let samples = match path {
        Some(path) => load_records(path, DEFAULT_DELIMITER, DEFAULT_SCALE)?,
        None => {
            let text = format_records(&linear_records(GENERATED_RECORDS, 1.0, -1.0), DEFAULT_DELIMITER);
            parse_records(&text, DEFAULT_DELIMITER, DEFAULT_SCALE)?
        }
    };
    info!("{} samples, {} epochs, learning rate {}", samples.len(), epochs, learning_rate);

    let mut rng = rand::thread_rng();
    let weight = rng.gen_range(-0.1..0.1);
    let bias = rng.gen_range(-0.1..0.1);

    let config = TrainConfig::default()
        .with_learning_rate(learning_rate)
        .with_epochs(epochs)
        .with_log_every(1);
    let mut session = TrainingSession::with_scalar_parameters(config, weight, bias)?;
    session.fit(&samples)?;

    println!("w = {}, b = {}", session.weights()?, session.bias()?);
    for x in [2.0, 26.0, 612.0, 150.0] {
        println!("guess({}) = {}", x, session.predict(&[x])?);
    }
    Ok(())
}
