//! Run command implementation
//!
//! Runs the configured experiment sweep and writes the report to stdout.

use std::io::Write;
use std::time::Instant;

use rbb_experiment::report::render;
use rbb_experiment::sweep::run_experiments;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the experiment sweep
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Starting experiments...");
    info!("  Bin counts: {:?}", config.experiment.bin_counts);
    info!("  Scale factors: {:?}", config.experiment.scale_factors);
    info!("  Rounds: {}", config.experiment.num_rounds);
    info!("  Repetitions: {}", config.experiment.num_repetitions);
    info!("  Output format: {}", config.format);

    let started = Instant::now();
    let reports = run_experiments(&config.experiment)?;
    let output = render(&reports, config.format)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        writeln!(handle)?;
    }
    handle.flush()?;

    info!(elapsed_secs = started.elapsed().as_secs_f64(), "Experiments complete");
    Ok(())
}
