//! Load vector construction and single-scan statistics.
//!
//! A load vector assigns a ball count to every bin; the index is the bin
//! identifier. The helpers in this module compute the summary statistics the
//! process engine caches, and are used to seed those caches at construction.

use crate::error::ProcessError;

/// Builds the most balanced load vector for `num_bins` bins and `num_balls` balls.
///
/// Every bin receives `num_balls / num_bins` balls and the first
/// `num_balls % num_bins` bins (in index order) receive one extra ball.
///
/// # Errors
///
/// Returns [`ProcessError::NoBins`] if `num_bins` is zero.
///
/// # Examples
///
/// ```rust
/// use rbb_core::load_vector::uniform_load_vector;
///
/// let loads = uniform_load_vector(4, 10).unwrap();
/// assert_eq!(loads, vec![3, 3, 2, 2]);
/// ```
pub fn uniform_load_vector(num_bins: usize, num_balls: u64) -> Result<Vec<u64>, ProcessError> {
    if num_bins == 0 {
        return Err(ProcessError::NoBins);
    }

    let bins = num_bins as u64;
    let mut loads = vec![num_balls / bins; num_bins];
    // rem < num_bins, so the cast back to usize is lossless
    let rem = (num_balls % bins) as usize;
    for load in loads.iter_mut().take(rem) {
        *load += 1;
    }
    Ok(loads)
}

/// Returns the total number of balls in the load vector.
#[inline]
pub fn total_balls(loads: &[u64]) -> u64 {
    loads.iter().sum()
}

/// Returns the maximum load, or 0 for an empty slice.
#[inline]
pub fn max_load(loads: &[u64]) -> u64 {
    loads.iter().copied().max().unwrap_or(0)
}

/// Returns the number of bins holding no balls.
#[inline]
pub fn count_empty_bins(loads: &[u64]) -> usize {
    loads.iter().filter(|&&load| load == 0).count()
}
