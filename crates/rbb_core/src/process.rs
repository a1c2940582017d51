//! The Repeated Balls-into-Bins process engine.
//!
//! [`RbbProcess`] owns a load vector together with two cached statistics,
//! the maximum load and the number of empty bins. Both caches are exact
//! after construction and after every completed round.
//!
//! # Round Structure
//!
//! ```text
//! next_round()
//! ├── Phase 1: collection      O(n)  remove one ball per non-empty bin,
//! │                                  rescan max load and empty bins
//! └── Phase 2: redistribution  O(k)  throw k balls uniformly, update
//!                                    statistics per increment
//! ```
//!
//! where `k` is the number of bins that were non-empty when the round began.
//! Phase 1 can only lower loads, so the previous maximum is not a bound and
//! several bins may empty at once; a full rescan is required there. Each
//! phase 2 increment can only raise the maximum or fill exactly one empty
//! bin, so its statistics are updated in O(1).

use crate::error::ProcessError;
use crate::load_vector::{self, uniform_load_vector};
use crate::rng::BinSampler;

/// Statistics observed at the end of one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundSummary {
    /// Balls removed in phase 1 and reallocated in phase 2.
    pub balls_allocated: usize,
    /// Maximum load after the round.
    pub max_load: u64,
    /// Number of empty bins after the round.
    pub num_empty_bins: usize,
}

/// State of one Repeated Balls-into-Bins process.
///
/// The number of bins is fixed for the lifetime of the process and the
/// total number of balls is conserved by every round.
///
/// # Examples
///
/// ```rust
/// use rbb_core::process::RbbProcess;
/// use rbb_core::rng::SimulationRng;
///
/// let mut process = RbbProcess::new(vec![0, 2, 5]).unwrap();
/// assert_eq!(process.max_load(), 5);
/// assert_eq!(process.num_empty_bins(), 1);
///
/// let mut rng = SimulationRng::from_seed(1);
/// let summary = process.next_round(&mut rng);
///
/// assert_eq!(summary.balls_allocated, 2);
/// assert_eq!(process.total_balls(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct RbbProcess {
    /// Current ball count per bin.
    loads: Vec<u64>,
    /// Cached `max(loads)`.
    max_load: u64,
    /// Cached number of zero entries in `loads`.
    num_empty_bins: usize,
    /// Number of completed rounds.
    round: u64,
}

impl RbbProcess {
    /// Creates a process from an initial load vector.
    ///
    /// The cached statistics are computed with a single scan.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::NoBins`] if `loads` is empty.
    pub fn new(loads: Vec<u64>) -> Result<Self, ProcessError> {
        if loads.is_empty() {
            return Err(ProcessError::NoBins);
        }

        let mut max_load = 0;
        let mut num_empty_bins = 0;
        for &load in &loads {
            max_load = max_load.max(load);
            num_empty_bins += usize::from(load == 0);
        }

        Ok(Self {
            loads,
            max_load,
            num_empty_bins,
            round: 0,
        })
    }

    /// Creates a process starting from the balanced load vector for
    /// `num_bins` bins and `num_balls` balls.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::NoBins`] if `num_bins` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbb_core::process::RbbProcess;
    ///
    /// let process = RbbProcess::uniform(4, 10).unwrap();
    /// assert_eq!(process.loads(), &[3, 3, 2, 2]);
    /// ```
    pub fn uniform(num_bins: usize, num_balls: u64) -> Result<Self, ProcessError> {
        Self::new(uniform_load_vector(num_bins, num_balls)?)
    }

    /// Performs one round of the process.
    ///
    /// Removes one ball from every non-empty bin, then allocates the removed
    /// balls to bins drawn uniformly at random (with replacement) from
    /// `sampler`.
    pub fn next_round<S: BinSampler + ?Sized>(&mut self, sampler: &mut S) -> RoundSummary {
        let balls_to_allocate = self.collect();
        self.redistribute(balls_to_allocate, sampler);
        self.round += 1;

        RoundSummary {
            balls_allocated: balls_to_allocate,
            max_load: self.max_load,
            num_empty_bins: self.num_empty_bins,
        }
    }

    /// Phase 1: removes one ball from each non-empty bin and rescans the
    /// statistics. Returns the number of balls removed.
    fn collect(&mut self) -> usize {
        let balls_removed = self.loads.len() - self.num_empty_bins;

        let mut max_load = 0;
        let mut num_empty_bins = 0;
        for load in self.loads.iter_mut() {
            if *load > 0 {
                *load -= 1;
            }
            max_load = max_load.max(*load);
            num_empty_bins += usize::from(*load == 0);
        }

        self.max_load = max_load;
        self.num_empty_bins = num_empty_bins;
        balls_removed
    }

    /// Phase 2: throws `balls` balls into uniformly drawn bins, updating the
    /// statistics incrementally.
    fn redistribute<S: BinSampler + ?Sized>(&mut self, balls: usize, sampler: &mut S) {
        let num_bins = self.loads.len();
        for _ in 0..balls {
            let bin = sampler.sample_bin(num_bins);
            let load = &mut self.loads[bin];
            *load += 1;
            self.max_load = self.max_load.max(*load);
            if *load == 1 {
                self.num_empty_bins -= 1;
            }
        }
    }

    /// Returns the current maximum load.
    #[inline]
    pub fn max_load(&self) -> u64 {
        self.max_load
    }

    /// Returns the current number of empty bins.
    #[inline]
    pub fn num_empty_bins(&self) -> usize {
        self.num_empty_bins
    }

    /// Returns a copy of the current load vector.
    #[inline]
    pub fn load_vector(&self) -> Vec<u64> {
        self.loads.clone()
    }

    /// Returns a read-only view of the current load vector.
    #[inline]
    pub fn loads(&self) -> &[u64] {
        &self.loads
    }

    /// Returns the number of bins.
    #[inline]
    pub fn num_bins(&self) -> usize {
        self.loads.len()
    }

    /// Returns the total number of balls.
    #[inline]
    pub fn total_balls(&self) -> u64 {
        load_vector::total_balls(&self.loads)
    }

    /// Returns the number of completed rounds.
    #[inline]
    pub fn round(&self) -> u64 {
        self.round
    }
}
