//! Evaluates a payoff matrix file and prints the decision results as JSON.
//!
//! Usage: `decision-criteria <matrix.json|matrix.yaml> [alpha]`

use std::process::ExitCode;

use thiserror::Error;
use tracing::info;

use decision_criteria::adapters::{read_matrix, telemetry, MatrixFileError};
use decision_criteria::config::{AppConfig, ConfigError};
use decision_criteria::domain::foundation::DecisionError;

#[derive(Debug, Error)]
enum CliError {
    #[error("usage: decision-criteria <matrix.json|matrix.yaml> [alpha]")]
    Usage,

    #[error("alpha must be a number, got '{0}'")]
    AlphaNotANumber(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    MatrixFile(#[from] MatrixFileError),

    #[error(transparent)]
    Decision(#[from] DecisionError),

    #[error("Failed to render results: {0}")]
    Output(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    if let Err(e) = telemetry::init(&config.logging) {
        eprintln!("warning: logging not initialized: {}", e);
    }

    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or(CliError::Usage)?;
    let alpha = match args.next() {
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|_| CliError::AlphaNotANumber(raw.clone()))?,
        None => config.analysis.default_alpha,
    };
    if args.next().is_some() {
        return Err(CliError::Usage);
    }

    let matrix = read_matrix(&path)?;
    let results = config.analysis.engine().evaluate(&matrix, alpha)?;

    let consensus = results.consensus();
    info!(
        path = %path,
        leading_index = consensus.leading_index,
        leading_votes = consensus.leading_votes,
        unanimous = consensus.unanimous,
        "Evaluation complete"
    );

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
