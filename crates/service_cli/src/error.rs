//! Error types for the RBB CLI.

use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Experiment execution error
    #[error("Experiment error: {0}")]
    Experiment(#[from] rbb_experiment::error::ExperimentError),

    /// Writing the report failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
