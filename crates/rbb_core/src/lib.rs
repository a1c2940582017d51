//! # RBB Core (Layer 1: Process Kernel)
//!
//! `rbb_core` implements the Repeated Balls-into-Bins (RBB) process introduced
//! in "Self-Stabilizing Repeated Balls-into-Bins" (Becchetti, Clementi, Natale,
//! Pasquale and Posta, 2015).
//!
//! The process starts from an arbitrary load vector with `n` bins and `m`
//! balls. In each round:
//!
//! 1. One ball is removed from each non-empty bin.
//! 2. The removed balls are allocated uniformly at random to the `n` bins.
//!
//! ## Module Structure
//!
//! - [`load_vector`]: initial load vector construction and single-scan statistics
//! - [`rng`]: the [`BinSampler`](rng::BinSampler) capability and the seeded
//!   [`SimulationRng`](rng::SimulationRng)
//! - [`process`]: the stateful [`RbbProcess`](process::RbbProcess) engine
//! - [`error`]: construction errors
//!
//! ## Usage Example
//!
//! ```rust
//! use rbb_core::process::RbbProcess;
//! use rbb_core::rng::SimulationRng;
//!
//! let mut rng = SimulationRng::from_seed(42);
//! let mut process = RbbProcess::uniform(100, 400).unwrap();
//!
//! for _ in 0..1_000 {
//!     process.next_round(&mut rng);
//! }
//!
//! assert_eq!(process.total_balls(), 400);
//! assert!(process.max_load() >= 4);
//! ```

pub mod error;
pub mod load_vector;
pub mod process;
pub mod rng;

pub use error::ProcessError;
pub use load_vector::uniform_load_vector;
pub use process::{RbbProcess, RoundSummary};
pub use rng::{BinSampler, SimulationRng};
