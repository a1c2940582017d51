//! Integration tests for the experiment sweep.
//!
//! # Test Categories
//!
//! 1. **Reproducibility**: identical configurations give identical reports
//! 2. **Known limits**: single-bin and sparse systems with closed-form averages
//! 3. **Output**: the text report layout for a full sweep

use approx::assert_relative_eq;
use rbb_experiment::prelude::*;

fn small_config(seed: u64) -> ExperimentConfig {
    ExperimentConfig {
        bin_counts: vec![10, 30],
        scale_factors: vec![1, 4, 7],
        num_rounds: 300,
        num_repetitions: 3,
        seed,
    }
}

#[test]
fn test_sweep_is_reproducible() {
    let first = run_experiments(&small_config(5)).unwrap();
    let second = run_experiments(&small_config(5)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sweep_point_matches_direct_call() {
    let config = small_config(11);
    let reports = run_experiments(&config).unwrap();

    let point = &reports[1].points[2];
    let direct = run_sweep_point(30, 210, config.num_rounds, config.num_repetitions, config.seed)
        .unwrap();

    assert_eq!(point.num_balls, 210);
    assert_eq!(point.avg_max_load, direct.avg_max_load);
    assert_eq!(point.avg_empty_bin_fraction, direct.avg_empty_bin_fraction);
}

#[test]
fn test_single_bin_sweep() {
    let config = ExperimentConfig {
        bin_counts: vec![1],
        scale_factors: vec![3, 9],
        num_rounds: 50,
        num_repetitions: 2,
        seed: 0,
    };

    let reports = run_experiments(&config).unwrap();
    let points = &reports[0].points;

    assert_relative_eq!(points[0].avg_max_load, 3.0);
    assert_relative_eq!(points[1].avg_max_load, 9.0);
    assert_relative_eq!(points[0].avg_empty_bin_fraction, 0.0);
}

#[test]
fn test_more_balls_fewer_empty_bins() {
    let averages_sparse = run_sweep_point(50, 50, 2_000, 2, 1).unwrap();
    let averages_dense = run_sweep_point(50, 50 * 25, 2_000, 2, 1).unwrap();

    assert!(averages_dense.avg_max_load > averages_sparse.avg_max_load);
    assert!(averages_dense.avg_empty_bin_fraction < averages_sparse.avg_empty_bin_fraction);
}

#[test]
fn test_text_report_layout() {
    let config = small_config(2);
    let reports = run_experiments(&config).unwrap();
    let text = render(&reports, OutputFormat::Text).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // Header plus two lines per scale factor, per bin count
    assert_eq!(lines.len(), 2 * (1 + 2 * 3));
    assert_eq!(lines[0], "Results for 10 bins:");
    assert_eq!(lines[7], "Results for 30 bins:");

    for line in lines.iter().filter(|l| !l.starts_with("Results")) {
        assert!(line.starts_with('(') && line.ends_with(')'), "bad line {}", line);
        assert!(line.contains(", "));
    }
    assert!(lines[1].starts_with("(1, "));
    assert!(lines[4].starts_with("(1, "));
}

#[test]
fn test_json_report() {
    let reports = run_experiments(&small_config(3)).unwrap();
    let json = render_json(&reports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert_eq!(value[0]["num_bins"], 10);
    assert_eq!(value[0]["points"][1]["scale_factor"], 4);
}
