//! RBB CLI - Repeated Balls-into-Bins experiments
//!
//! Entry point for reproducing the maximum-load and empty-bin figures of the
//! Repeated Balls-into-Bins process.
//!
//! # Commands
//!
//! - `rbb` / `rbb run` - Run the experiment sweep and print the results
//! - `rbb check` - Print the effective configuration
//!
//! Without arguments the reference sweep is run: `n ∈ {100, 1000, 10000}`,
//! `m ∈ {n, 4n, …, 52n}`, 10⁶ rounds and 25 repetitions per point.

use clap::{Parser, Subcommand};
use rbb_experiment::report::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// Repeated Balls-into-Bins experiment runner
#[derive(Parser, Debug)]
#[command(name = "rbb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", env = "RBB_CONFIG")]
    config: Option<PathBuf>,

    /// Comma-separated bin counts
    #[arg(long, global = true, value_delimiter = ',', env = "RBB_BIN_COUNTS")]
    bin_counts: Option<Vec<usize>>,

    /// Comma-separated scale factors (m = factor × n)
    #[arg(long, global = true, value_delimiter = ',', env = "RBB_SCALE_FACTORS")]
    scale_factors: Option<Vec<u64>>,

    /// Rounds per repetition
    #[arg(long, global = true, env = "RBB_ROUNDS")]
    rounds: Option<u64>,

    /// Independent repetitions per sweep point
    #[arg(long, global = true, env = "RBB_REPETITIONS")]
    repetitions: Option<u64>,

    /// Seed of the random stream
    #[arg(long, global = true, env = "RBB_SEED")]
    seed: Option<u64>,

    /// Output format (text, json)
    #[arg(short, long, global = true, env = "RBB_FORMAT")]
    format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "RBB_LOG_LEVEL")]
    log_level: Option<config::LogLevel>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the experiment sweep (default)
    Run,

    /// Validate and print the effective configuration
    Check,
}

impl From<&Cli> for config::CliArgs {
    fn from(cli: &Cli) -> Self {
        config::CliArgs {
            config_file: cli.config.clone(),
            bin_counts: cli.bin_counts.clone(),
            scale_factors: cli.scale_factors.clone(),
            num_rounds: cli.rounds,
            num_repetitions: cli.repetitions,
            seed: cli.seed,
            format: cli.format,
            log_level: cli.log_level,
        }
    }
}

/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(level: config::LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.level_filter().into()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::build_config(&config::CliArgs::from(&cli))?;

    init_tracing(config.log_level);
    tracing::info!("RBB CLI v{}", env!("CARGO_PKG_VERSION"));

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::run(&config)?,
        Commands::Check => commands::check::run(&config)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level_parsed_by_clap() {
        let cli = Cli::try_parse_from(["rbb", "--log-level", "WARN", "check"]).unwrap();
        assert_eq!(cli.log_level, Some(config::LogLevel::Warn));
        assert!(matches!(cli.command, Some(Commands::Check)));
    }

    #[test]
    fn test_unknown_log_level_rejected_by_clap() {
        let err = Cli::try_parse_from(["rbb", "--log-level", "loud"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
