//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Default alpha must be between 0 and 1, got {0}")]
    InvalidDefaultAlpha(f64),

    #[error("Decimal places must be at most {max}, got {actual}")]
    TooManyDecimalPlaces { max: usize, actual: usize },

    #[error("Log level directive cannot be empty")]
    EmptyLogLevel,
}
