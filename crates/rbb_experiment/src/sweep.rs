//! Experiment sweep over bin counts and scale factors.
//!
//! # Architecture
//!
//! ```text
//! run_experiments(config)
//! └── for n in bin_counts
//!     └── for f in scale_factors               (m = f × n)
//!         └── run_sweep_point(n, m, ...)       one SimulationRng per point
//!             └── for each repetition          fresh balanced RbbProcess
//!                 └── for each round           next_round + record
//! ```
//!
//! All repetitions of a sweep point draw from the same random stream, so a
//! point's averages depend only on `(n, m, num_rounds, num_repetitions, seed)`.

use rbb_core::{RbbProcess, SimulationRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::aggregate::StatisticsAccumulator;
use crate::config::ExperimentConfig;
use crate::error::ExperimentError;

/// Averages observed at one `(n, m)` pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointAverages {
    /// Mean maximum load over all rounds of all repetitions.
    pub avg_max_load: f64,
    /// Mean number of empty bins divided by the number of bins.
    pub avg_empty_bin_fraction: f64,
}

/// Result for one `(n, f)` pair of the sweep.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Number of bins `n`.
    pub num_bins: usize,
    /// Scale factor `f`.
    pub scale_factor: u64,
    /// Number of balls `m = f × n`.
    pub num_balls: u64,
    /// Mean maximum load.
    pub avg_max_load: f64,
    /// Mean fraction of empty bins.
    pub avg_empty_bin_fraction: f64,
}

/// All sweep points sharing one bin count, in scale factor order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinCountReport {
    /// Number of bins `n`.
    pub num_bins: usize,
    /// One entry per configured scale factor.
    pub points: Vec<SweepPoint>,
}

/// Runs `num_repetitions` independent processes with `num_bins` bins and
/// `num_balls` balls for `num_rounds` rounds each, averaging the maximum
/// load and the empty-bin fraction over every observed round.
///
/// Each repetition starts from the balanced load vector. A single random
/// stream seeded with `seed` is shared by the repetitions.
///
/// # Errors
///
/// Returns [`ExperimentError::Process`] if `num_bins` is zero.
pub fn run_sweep_point(
    num_bins: usize,
    num_balls: u64,
    num_rounds: u64,
    num_repetitions: u64,
    seed: u64,
) -> Result<PointAverages, ExperimentError> {
    let mut rng = SimulationRng::from_seed(seed);
    let mut acc = StatisticsAccumulator::new();

    for repetition in 0..num_repetitions {
        let mut process = RbbProcess::uniform(num_bins, num_balls)?;
        for _ in 0..num_rounds {
            let summary = process.next_round(&mut rng);
            acc.record_round(&summary);
        }
        debug!(
            num_bins,
            num_balls,
            repetition,
            max_load = process.max_load(),
            num_empty_bins = process.num_empty_bins(),
            "Repetition finished"
        );
    }

    Ok(PointAverages {
        avg_max_load: acc.average_max_load(),
        avg_empty_bin_fraction: acc.average_empty_bin_fraction(num_bins),
    })
}

/// Runs the full sweep described by `config`.
///
/// Bin counts form the outer loop and scale factors the inner loop; the
/// returned reports follow the configured order.
///
/// # Errors
///
/// - [`ExperimentError::Config`] if the configuration is invalid
/// - [`ExperimentError::BallCountOverflow`] if `f × n` overflows `u64`
pub fn run_experiments(config: &ExperimentConfig) -> Result<Vec<BinCountReport>, ExperimentError> {
    config.validate()?;

    info!(
        bin_counts = ?config.bin_counts,
        scale_factors = config.scale_factors.len(),
        num_rounds = config.num_rounds,
        num_repetitions = config.num_repetitions,
        samples_per_point = config.samples_per_point(),
        seed = config.seed,
        "Starting RBB experiment sweep"
    );

    let mut reports = Vec::with_capacity(config.bin_counts.len());
    for &num_bins in &config.bin_counts {
        info!(num_bins, "Running sweep for bin count");

        let mut points = Vec::with_capacity(config.scale_factors.len());
        for &scale_factor in &config.scale_factors {
            let num_balls = scale_factor.checked_mul(num_bins as u64).ok_or(
                ExperimentError::BallCountOverflow {
                    num_bins,
                    scale_factor,
                },
            )?;

            let averages = run_sweep_point(
                num_bins,
                num_balls,
                config.num_rounds,
                config.num_repetitions,
                config.seed,
            )?;

            info!(
                num_bins,
                scale_factor,
                avg_max_load = averages.avg_max_load,
                avg_empty_bin_fraction = averages.avg_empty_bin_fraction,
                "Sweep point complete"
            );

            points.push(SweepPoint {
                num_bins,
                scale_factor,
                num_balls,
                avg_max_load: averages.avg_max_load,
                avg_empty_bin_fraction: averages.avg_empty_bin_fraction,
            });
        }

        reports.push(BinCountReport { num_bins, points });
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_bin_point() {
        let averages = run_sweep_point(1, 5, 100, 3, 0).unwrap();
        assert_relative_eq!(averages.avg_max_load, 5.0);
        assert_relative_eq!(averages.avg_empty_bin_fraction, 0.0);
    }

    #[test]
    fn test_empty_system_point() {
        let averages = run_sweep_point(8, 0, 50, 2, 0).unwrap();
        assert_relative_eq!(averages.avg_max_load, 0.0);
        assert_relative_eq!(averages.avg_empty_bin_fraction, 1.0);
    }

    #[test]
    fn test_zero_bins_point_rejected() {
        assert!(matches!(
            run_sweep_point(0, 5, 10, 1, 0),
            Err(ExperimentError::Process(_))
        ));
    }

    #[test]
    fn test_point_bounds() {
        let averages = run_sweep_point(20, 80, 200, 2, 3).unwrap();
        // Max load is at least the mean load; some bins are empty at times
        assert!(averages.avg_max_load >= 4.0);
        assert!(averages.avg_max_load <= 80.0);
        assert!(averages.avg_empty_bin_fraction >= 0.0);
        assert!(averages.avg_empty_bin_fraction < 1.0);
    }

    #[test]
    fn test_run_experiments_shape() {
        let config = ExperimentConfig {
            bin_counts: vec![5, 10],
            scale_factors: vec![1, 4, 7],
            num_rounds: 20,
            num_repetitions: 2,
            seed: 9,
        };

        let reports = run_experiments(&config).unwrap();

        assert_eq!(reports.len(), 2);
        for (report, &n) in reports.iter().zip(&config.bin_counts) {
            assert_eq!(report.num_bins, n);
            let factors: Vec<u64> = report.points.iter().map(|p| p.scale_factor).collect();
            assert_eq!(factors, vec![1, 4, 7]);
            for point in &report.points {
                assert_eq!(point.num_balls, point.scale_factor * n as u64);
            }
        }
    }

    #[test]
    fn test_run_experiments_invalid_config() {
        let config = ExperimentConfig {
            num_rounds: 0,
            ..ExperimentConfig::default()
        };
        assert!(matches!(
            run_experiments(&config),
            Err(ExperimentError::Config(_))
        ));
    }

    #[test]
    fn test_run_experiments_large_ball_count() {
        // Four rounds of 2^62 balls sum to 2^64
        let config = ExperimentConfig {
            bin_counts: vec![1],
            scale_factors: vec![1 << 62],
            num_rounds: 4,
            num_repetitions: 1,
            seed: 0,
        };

        let reports = run_experiments(&config).unwrap();
        let point = &reports[0].points[0];
        assert_eq!(point.num_balls, 1 << 62);
        assert_relative_eq!(point.avg_max_load, (1u64 << 62) as f64);
        assert_relative_eq!(point.avg_empty_bin_fraction, 0.0);
    }

    #[test]
    fn test_run_experiments_overflow() {
        let config = ExperimentConfig {
            bin_counts: vec![8],
            scale_factors: vec![1 << 62],
            num_rounds: 1,
            num_repetitions: 1,
            seed: 0,
        };
        assert!(matches!(
            run_experiments(&config),
            Err(ExperimentError::BallCountOverflow { num_bins: 8, .. })
        ));
    }
}
