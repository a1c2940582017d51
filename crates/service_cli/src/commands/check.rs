//! Check command implementation
//!
//! Prints the effective configuration after merging defaults, the config
//! file and command line overrides, without running any rounds.

use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Print the effective configuration as TOML
pub fn run(config: &CliConfig) -> Result<()> {
    let experiment = &config.experiment;
    let sweep_points = experiment.bin_counts.len() * experiment.scale_factors.len();
    let total_rounds = (sweep_points as u64).saturating_mul(experiment.samples_per_point());

    info!(sweep_points, total_rounds, "Configuration is valid");

    print!("{}", config.to_toml_string()?);
    Ok(())
}
