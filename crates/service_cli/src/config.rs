//! CLI configuration management
//!
//! Handles loading configuration from TOML files and merging command line
//! overrides on top of it.

use rbb_experiment::config::{ConfigError as ExperimentConfigError, ExperimentConfig};
use rbb_experiment::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown log level '{0}' (expected one of {names})", names = LogLevel::NAMES.join(", "))]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error(transparent)]
    Experiment(#[from] ExperimentConfigError),
}

/// Verbosity of the diagnostics written to stderr, most verbose first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Every level, most verbose first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Accepted spellings, in the order of [`LogLevel::ALL`].
    pub const NAMES: [&'static str; 5] = ["trace", "debug", "info", "warn", "error"];

    /// Lowercase name used in config files and on the command line.
    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Maximum verbosity handed to the tracing subscriber.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Effective CLI configuration: the experiment sweep plus output settings.
///
/// In a TOML file the sweep parameters sit at the top level next to
/// `log_level` and `format`:
///
/// ```toml
/// bin_counts = [100, 1000]
/// scale_factors = [1, 4, 7]
/// num_rounds = 100000
/// num_repetitions = 5
/// seed = 42
/// log_level = "debug"
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Sweep parameters
    #[serde(flatten)]
    pub experiment: ExperimentConfig,
    /// Log level
    pub log_level: LogLevel,
    /// Report format
    pub format: OutputFormat,
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::FileError(format!("Failed to serialise TOML: {}", e)))
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(bin_counts) = &cli.bin_counts {
            self.experiment.bin_counts = bin_counts.clone();
        }
        if let Some(scale_factors) = &cli.scale_factors {
            self.experiment.scale_factors = scale_factors.clone();
        }
        if let Some(num_rounds) = cli.num_rounds {
            self.experiment.num_rounds = num_rounds;
        }
        if let Some(num_repetitions) = cli.num_repetitions {
            self.experiment.num_repetitions = num_repetitions;
        }
        if let Some(seed) = cli.seed {
            self.experiment.seed = seed;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.experiment.validate()?;
        Ok(())
    }
}

/// Command line overrides
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Bin counts override
    pub bin_counts: Option<Vec<usize>>,
    /// Scale factors override
    pub scale_factors: Option<Vec<u64>>,
    /// Rounds per repetition override
    pub num_rounds: Option<u64>,
    /// Repetitions override
    pub num_repetitions: Option<u64>,
    /// Seed override
    pub seed: Option<u64>,
    /// Report format override
    pub format: Option<OutputFormat>,
    /// Log level override
    pub log_level: Option<LogLevel>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments (including their environment variables)
/// 2. Config file
/// 3. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
