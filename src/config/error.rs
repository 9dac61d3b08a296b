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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Storage data_dir must not be empty for the file backend")]
    MissingDataDir,

    #[error("default_top_n must be between 1 and max_top_n")]
    InvalidDefaultTopN,

    #[error("max_top_n must be between 1 and 100")]
    InvalidMaxTopN,

    #[error("Primary question id must not be empty")]
    MissingPrimaryQuestion,
}
