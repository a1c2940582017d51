//! Running sums of per-round process statistics.

use rbb_core::RoundSummary;

/// Accumulates maximum loads and empty-bin counts over observed rounds.
///
/// Only sums and the sample count are kept; averages are computed on demand.
/// Sums are 128-bit so that any `u64` load observed over any `u64` number of
/// rounds fits.
///
/// # Examples
///
/// ```rust
/// use rbb_experiment::aggregate::StatisticsAccumulator;
///
/// let mut acc = StatisticsAccumulator::new();
/// acc.record(4, 10);
/// acc.record(6, 30);
///
/// assert_eq!(acc.average_max_load(), 5.0);
/// assert_eq!(acc.average_empty_bin_fraction(100), 0.2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatisticsAccumulator {
    sum_max_load: u128,
    sum_empty_bins: u128,
    samples: u64,
}

impl StatisticsAccumulator {
    /// Creates an empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the statistics observed after one round.
    #[inline]
    pub fn record(&mut self, max_load: u64, num_empty_bins: usize) {
        self.sum_max_load += u128::from(max_load);
        self.sum_empty_bins += num_empty_bins as u128;
        self.samples += 1;
    }

    /// Records the statistics carried by a round summary.
    #[inline]
    pub fn record_round(&mut self, summary: &RoundSummary) {
        self.record(summary.max_load, summary.num_empty_bins);
    }

    /// Number of recorded rounds.
    #[inline]
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Mean maximum load over all recorded rounds, 0 if none were recorded.
    pub fn average_max_load(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.sum_max_load as f64 / self.samples as f64
    }

    /// Mean number of empty bins over all recorded rounds, 0 if none were recorded.
    pub fn average_empty_bins(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.sum_empty_bins as f64 / self.samples as f64
    }

    /// Mean fraction of empty bins for a system of `num_bins` bins.
    pub fn average_empty_bin_fraction(&self, num_bins: usize) -> f64 {
        if num_bins == 0 {
            return 0.0;
        }
        self.average_empty_bins() / num_bins as f64
    }
}
