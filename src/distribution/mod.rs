//! Soliton degree distributions
//!
//! This module builds the Soliton and Robust Soliton distributions that
//! fountain codes (LT codes and their descendants) use to choose how many
//! source symbols each encoded symbol combines.
//!
//! # Layout
//!
//! - [`pmf`]: the unnormalized mass functions `rho` and `tau`
//! - [`precise`]: double-double accumulation for normalization
//! - [`soliton`]: the split table, its builders and its queries
//! - [`sampler`]: a table bundled with an owned, seedable random source
//!
//! # Randomness
//!
//! Tables never own a generator. [`Soliton::sample`] borrows any
//! `rand::Rng` for one draw, and [`DegreeSampler`] owns one explicitly
//! seeded generator per consumer. There is no process-wide source.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use soliton::distribution::{DegreeSampler, DegreeSource, Soliton};
//!
//! let table = Arc::new(Soliton::robust(10_000, 0.1, 0.05).unwrap());
//! let mut sampler = DegreeSampler::with_seed(table, 1);
//!
//! for _ in 0..10 {
//!     let degree = sampler.next_degree();
//!     assert!(degree >= 1 && degree <= 10_000);
//! }
//! ```

/// Source of encoding degrees
///
/// Implementations return degrees in `{1, ..., max_degree()}`. Each caller
/// typically owns its own source so that no random state is shared.
///
/// # Thread Safety
///
/// Sources must be `Send` so they can be handed to worker threads.
pub trait DegreeSource: Send {
    /// Draw the next degree
    fn next_degree(&mut self) -> u64;

    /// Largest degree this source can return
    fn max_degree(&self) -> u64;
}

pub mod pmf;
pub mod precise;
pub mod sampler;
pub mod soliton;

pub use sampler::DegreeSampler;
pub use soliton::{Soliton, SolitonKind};
