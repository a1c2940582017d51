//! Experiment sweep configuration.
//!
//! [`ExperimentConfig`] holds the swept parameters. The defaults reproduce
//! the reference figure: `n ∈ {10², 10³, 10⁴}`, `m ∈ {n, 4n, …, 52n}`,
//! 10⁶ rounds and 25 repetitions per `(n, m)` pair.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default bin counts of the reference sweep.
pub const DEFAULT_BIN_COUNTS: [usize; 3] = [100, 1_000, 10_000];

/// Largest scale factor of the reference sweep.
pub const DEFAULT_MAX_SCALE_FACTOR: u64 = 52;

/// Step between consecutive scale factors of the reference sweep.
pub const DEFAULT_SCALE_FACTOR_STEP: usize = 3;

/// Default number of rounds per repetition.
pub const DEFAULT_NUM_ROUNDS: u64 = 1_000_000;

/// Default number of independent repetitions per sweep point.
pub const DEFAULT_NUM_REPETITIONS: u64 = 25;

/// Largest value accepted for any integer parameter.
///
/// Configuration files store integers as signed 64-bit values, so every
/// parameter is bounded by `i64::MAX` to keep files and flags in step.
pub const MAX_PARAMETER_VALUE: u64 = i64::MAX as u64;

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// One or more parameters are invalid
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Swept parameters of an RBB experiment.
///
/// Missing fields fall back to the reference values when deserialised.
///
/// # Examples
///
/// ```rust
/// use rbb_experiment::config::ExperimentConfig;
///
/// let config = ExperimentConfig::default();
/// assert_eq!(config.bin_counts, vec![100, 1_000, 10_000]);
/// assert_eq!(config.scale_factors.first(), Some(&1));
/// assert_eq!(config.scale_factors.last(), Some(&52));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Numbers of bins `n` to sweep over.
    pub bin_counts: Vec<usize>,
    /// Multipliers `f` giving `m = f × n` balls.
    pub scale_factors: Vec<u64>,
    /// Rounds per repetition.
    pub num_rounds: u64,
    /// Independent restarts per `(n, m)` pair.
    pub num_repetitions: u64,
    /// Seed of the random stream used for every sweep point.
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            bin_counts: DEFAULT_BIN_COUNTS.to_vec(),
            scale_factors: (1..=DEFAULT_MAX_SCALE_FACTOR)
                .step_by(DEFAULT_SCALE_FACTOR_STEP)
                .collect(),
            num_rounds: DEFAULT_NUM_ROUNDS,
            num_repetitions: DEFAULT_NUM_REPETITIONS,
            seed: 0,
        }
    }
}

impl ExperimentConfig {
    /// Total number of rounds observed per sweep point.
    #[inline]
    pub fn samples_per_point(&self) -> u64 {
        self.num_rounds.saturating_mul(self.num_repetitions)
    }

    /// Validate the configuration, collecting every problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.bin_counts.is_empty() {
            errors.push("bin_counts must contain at least one entry".to_string());
        }
        if self.bin_counts.contains(&0) {
            errors.push("bin_counts entries must be greater than 0".to_string());
        }

        if self.scale_factors.is_empty() {
            errors.push("scale_factors must contain at least one entry".to_string());
        }
        if self.scale_factors.contains(&0) {
            errors.push("scale_factors entries must be greater than 0".to_string());
        }

        if self.num_rounds == 0 {
            errors.push("num_rounds must be greater than 0".to_string());
        }
        if self.num_repetitions == 0 {
            errors.push("num_repetitions must be greater than 0".to_string());
        }

        let too_large = |value: u64| value > MAX_PARAMETER_VALUE;
        if self.bin_counts.iter().any(|&n| too_large(n as u64)) {
            errors.push(format!("bin_counts entries exceed {}", MAX_PARAMETER_VALUE));
        }
        if self.scale_factors.iter().copied().any(too_large) {
            errors.push(format!("scale_factors entries exceed {}", MAX_PARAMETER_VALUE));
        }
        for (name, value) in [
            ("num_rounds", self.num_rounds),
            ("num_repetitions", self.num_repetitions),
            ("seed", self.seed),
        ] {
            if too_large(value) {
                errors.push(format!("{} {} exceeds {}", name, value, MAX_PARAMETER_VALUE));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExperimentConfig::default();
        assert_eq!(config.bin_counts, vec![100, 1_000, 10_000]);
        assert_eq!(
            config.scale_factors,
            vec![1, 4, 7, 10, 13, 16, 19, 22, 25, 28, 31, 34, 37, 40, 43, 46, 49, 52]
        );
        assert_eq!(config.num_rounds, 1_000_000);
        assert_eq!(config.num_repetitions, 25);
        assert_eq!(config.samples_per_point(), 25_000_000);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(ExperimentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_bin_count() {
        let config = ExperimentConfig {
            bin_counts: vec![10, 0],
            ..ExperimentConfig::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("bin_counts")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_multiple_errors() {
        let config = ExperimentConfig {
            bin_counts: Vec::new(),
            scale_factors: vec![0],
            num_rounds: 0,
            num_repetitions: 0,
            seed: 1,
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 4, "unexpected errors: {:?}", errors);
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_values_beyond_i64() {
        let config = ExperimentConfig {
            scale_factors: vec![1, u64::MAX],
            num_rounds: u64::MAX,
            num_repetitions: MAX_PARAMETER_VALUE + 1,
            seed: u64::MAX,
            ..ExperimentConfig::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 4, "unexpected errors: {:?}", errors);
                assert!(errors.iter().any(|e| e.starts_with("seed")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_i64_max() {
        let config = ExperimentConfig {
            seed: MAX_PARAMETER_VALUE,
            ..ExperimentConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = error.to_string();
        assert!(display.contains("Error 1; Error 2"));
    }
}
