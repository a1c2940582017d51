//! Error types for the RBB process kernel.

use thiserror::Error;

/// Construction errors for load vectors and processes.
///
/// Round transitions never fail; every error is raised before the
/// first round is run.
///
/// # Examples
/// ```
/// use rbb_core::ProcessError;
///
/// let err = ProcessError::NoBins;
/// assert_eq!(format!("{}", err), "Invalid bin count: at least one bin is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// The load vector has no bins.
    #[error("Invalid bin count: at least one bin is required")]
    NoBins,
}
