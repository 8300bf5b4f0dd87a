//! Seeded degree sampler
//!
//! A [`DegreeSampler`] pairs a shared, immutable [`Soliton`] table with a
//! random source it owns. Workers that each need their own stream of
//! degrees clone the `Arc` and create one sampler apiece; the table is never
//! copied and never locked.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use soliton::distribution::{DegreeSampler, DegreeSource};
//! use soliton::Soliton;
//!
//! let table = Arc::new(Soliton::ideal(100).unwrap());
//! let mut sampler = DegreeSampler::with_seed(table, 42);
//!
//! let degree = sampler.next_degree();
//! assert!(degree >= 1 && degree <= sampler.max_degree());
//! ```

use super::soliton::Soliton;
use super::DegreeSource;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::sync::Arc;
use tracing::trace;

/// Degree generator over a shared table
///
/// Defaults to xoshiro256++, which is fast and statistically sound for
/// simulation use. Any other `RngCore` can be supplied with
/// [`DegreeSampler::from_rng`].
pub struct DegreeSampler<R = Xoshiro256PlusPlus> {
    table: Arc<Soliton>,
    rng: R,
}

impl DegreeSampler<Xoshiro256PlusPlus> {
    /// Create a sampler seeded from OS entropy
    pub fn new(table: Arc<Soliton>) -> Self {
        trace!(k = table.k(), "seeding degree sampler from entropy");
        Self {
            table,
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Create a sampler with a specific seed
    ///
    /// Useful for reproducible tests.
    pub fn with_seed(table: Arc<Soliton>, seed: u64) -> Self {
        trace!(k = table.k(), seed, "seeding degree sampler");
        Self {
            table,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore> DegreeSampler<R> {
    /// Create a sampler drawing from a caller-supplied source
    pub fn from_rng(table: Arc<Soliton>, rng: R) -> Self {
        Self { table, rng }
    }

    /// The shared table this sampler draws from
    pub fn table(&self) -> &Arc<Soliton> {
        &self.table
    }

    /// Give the random source back, dropping this handle on the table
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<R: RngCore + Send> DegreeSource for DegreeSampler<R> {
    #[inline]
    fn next_degree(&mut self) -> u64 {
        self.table.sample(&mut self.rng)
    }

    fn max_degree(&self) -> u64 {
        self.table.k()
    }
}
