//! Soliton - degree distributions for fountain codes
//!
//! Soliton builds and samples the Soliton and Robust Soliton distributions
//! that LT codes and related fountain codes use to pick the degree of each
//! encoded symbol.
//!
//! # Architecture
//!
//! - **Mass functions**: the ideal `rho` and the robust correction `tau`
//! - **Table builder**: normalized CDF split points, summed in double-double precision
//! - **Queries**: inverse-CDF sampling, exact equality, mean, PMF recovery
//! - **Samplers**: shared tables paired with explicitly seeded generators
//! - **Configuration**: TOML description of which distribution to build
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//! use soliton::Soliton;
//!
//! let ideal = Soliton::ideal(3)?;
//! assert_eq!(ideal.splits(), &[1.0 / 3.0, 1.0 / 3.0 + 0.5, 1.0]);
//!
//! let robust = Soliton::robust(10_000, 0.1, 0.05)?;
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
//! let degree = robust.sample(&mut rng);
//! assert!(degree >= 1 && degree <= 10_000);
//! # Ok::<(), soliton::SolitonError>(())
//! ```

pub mod config;
pub mod distribution;
pub mod error;

// Re-export commonly used types
pub use config::DegreeConfig;
pub use distribution::{DegreeSampler, DegreeSource, Soliton, SolitonKind};
pub use error::SolitonError;

/// Result type used by the configuration layer
pub type Result<T> = anyhow::Result<T>;
