//! Error types for RBB experiments.

use rbb_core::ProcessError;
use thiserror::Error;

use crate::config::ConfigError;

/// Experiment error type
#[derive(Debug, Error)]
pub enum ExperimentError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Process construction error
    #[error("Process error: {0}")]
    Process(#[from] ProcessError),

    /// `scale_factor × num_bins` does not fit in a ball count
    #[error("Ball count overflow: {scale_factor} × {num_bins} exceeds u64::MAX")]
    BallCountOverflow {
        /// Number of bins of the sweep point
        num_bins: usize,
        /// Scale factor of the sweep point
        scale_factor: u64,
    },

    /// Report serialisation error
    #[error("Serialisation error: {0}")]
    Serialisation(String),
}

impl ExperimentError {
    /// Create a serialisation error
    pub fn serialisation(msg: impl Into<String>) -> Self {
        Self::Serialisation(msg.into())
    }
}
