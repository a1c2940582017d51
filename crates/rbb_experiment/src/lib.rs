//! # RBB Experiments (Layer 2: Orchestration)
//!
//! Runs the Repeated Balls-into-Bins process over a sweep of problem sizes
//! and reports time-averaged statistics.
//!
//! For every bin count `n` and scale factor `f` the sweep starts
//! `num_repetitions` independent processes from the balanced load vector
//! with `m = f × n` balls, runs each for `num_rounds` rounds and averages the
//! maximum load and the fraction of empty bins over all observed rounds.
//!
//! ## Module Structure
//!
//! - [`config`]: swept parameters, reference defaults and validation
//! - [`aggregate`]: running sums of per-round statistics
//! - [`sweep`]: the experiment loops
//! - [`report`]: text and JSON output
//! - [`error`]: experiment errors
//!
//! ## Usage Example
//!
//! ```rust
//! use rbb_experiment::config::ExperimentConfig;
//! use rbb_experiment::report::render_text;
//! use rbb_experiment::sweep::run_experiments;
//!
//! let config = ExperimentConfig {
//!     bin_counts: vec![10],
//!     scale_factors: vec![1, 4],
//!     num_rounds: 100,
//!     num_repetitions: 2,
//!     seed: 0,
//! };
//!
//! let reports = run_experiments(&config).unwrap();
//! let text = render_text(&reports);
//! assert!(text.starts_with("Results for 10 bins:"));
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod report;
pub mod sweep;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aggregate::StatisticsAccumulator;
    pub use crate::config::{ConfigError, ExperimentConfig};
    pub use crate::error::ExperimentError;
    pub use crate::report::{render, render_json, render_text, OutputFormat};
    pub use crate::sweep::{
        run_experiments, run_sweep_point, BinCountReport, PointAverages, SweepPoint,
    };
}
