//! Configuration module
//!
//! Describes which degree distribution to build, loaded from TOML. A config
//! only names parameters; the table itself is rebuilt from them every time.
//!
//! ```toml
//! seed = 42
//!
//! [distribution.robust]
//! k = 10000
//! c = 0.1
//! delta = 0.05
//! ```

pub mod toml;
pub mod validator;

use crate::distribution::{DegreeSampler, Soliton};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Complete degree distribution configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeConfig {
    /// Which distribution to build
    pub distribution: DistributionType,
    /// Sampler seed; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Degree distribution variant and its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionType {
    Ideal { k: u64 },
    Robust { k: u64, c: f64, delta: f64 },
}

impl DistributionType {
    /// Largest degree the distribution can produce
    pub fn k(&self) -> u64 {
        match self {
            DistributionType::Ideal { k } | DistributionType::Robust { k, .. } => *k,
        }
    }

    /// Validate the distribution parameters
    pub fn validate(&self) -> Result<(), String> {
        match self {
            DistributionType::Ideal { k } => {
                if *k == 0 {
                    Err("Ideal soliton k must be at least 1".to_string())
                } else {
                    Ok(())
                }
            }
            DistributionType::Robust { k, c, delta } => Soliton::validate_params(*k, *c, *delta)
                .map_err(|e| format!("Robust soliton parameters rejected: {}", e)),
        }
    }

    /// Build the table these parameters describe
    pub fn build(&self) -> Result<Soliton> {
        let table = match self {
            DistributionType::Ideal { k } => Soliton::ideal(*k),
            DistributionType::Robust { k, c, delta } => Soliton::robust(*k, *c, *delta),
        };
        table.with_context(|| format!("Failed to build {} distribution", self))
    }
}

impl fmt::Display for DistributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionType::Ideal { k } => write!(f, "ideal(k={})", k),
            DistributionType::Robust { k, c, delta } => {
                write!(f, "robust(k={}, c={}, delta={})", k, c, delta)
            }
        }
    }
}

impl DegreeConfig {
    /// Build the configured table
    pub fn build(&self) -> Result<Soliton> {
        self.distribution.build()
    }

    /// Build the configured table and wrap it in a sampler
    ///
    /// Uses `seed` when present so that runs are reproducible.
    pub fn sampler(&self) -> Result<DegreeSampler> {
        let table = Arc::new(self.build()?);
        Ok(match self.seed {
            Some(seed) => DegreeSampler::with_seed(table, seed),
            None => DegreeSampler::new(table),
        })
    }
}

impl fmt::Display for DegreeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.seed {
            Some(seed) => write!(f, "{} seed={}", self.distribution, seed),
            None => write!(f, "{} seed=entropy", self.distribution),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::DegreeSource;

    #[test]
    fn test_distribution_type_validate() {
        assert!(DistributionType::Ideal { k: 10 }.validate().is_ok());
        assert!(DistributionType::Ideal { k: 0 }.validate().is_err());

        let ok = DistributionType::Robust {
            k: 1000,
            c: 0.1,
            delta: 0.05,
        };
        assert!(ok.validate().is_ok());

        let bad_delta = DistributionType::Robust {
            k: 1000,
            c: 0.1,
            delta: 1.5,
        };
        let err = bad_delta.validate().unwrap_err();
        assert!(err.contains("delta must be in (0, 1)"), "{}", err);

        let bad_c = DistributionType::Robust {
            k: 1000,
            c: 0.0,
            delta: 0.05,
        };
        assert!(bad_c.validate().is_err());
    }

    #[test]
    fn test_build_matches_direct_construction() {
        let ty = DistributionType::Robust {
            k: 200,
            c: 0.1,
            delta: 0.05,
        };
        assert_eq!(ty.build().unwrap(), Soliton::robust(200, 0.1, 0.05).unwrap());

        let ty = DistributionType::Ideal { k: 50 };
        assert_eq!(ty.build().unwrap(), Soliton::ideal(50).unwrap());
    }

    #[test]
    fn test_build_error_has_context() {
        let err = DistributionType::Ideal { k: 0 }.build().unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Failed to build ideal(k=0) distribution"), "{}", chain);
        assert!(chain.contains("k must be at least 1"), "{}", chain);
    }

    #[test]
    fn test_seeded_sampler_is_reproducible() {
        let config = DegreeConfig {
            distribution: DistributionType::Robust {
                k: 500,
                c: 0.1,
                delta: 0.05,
            },
            seed: Some(99),
        };
        let mut a = config.sampler().unwrap();
        let mut b = config.sampler().unwrap();
        assert_eq!(a.max_degree(), 500);
        for _ in 0..50 {
            assert_eq!(a.next_degree(), b.next_degree());
        }
    }

    #[test]
    fn test_unseeded_sampler() {
        let config = DegreeConfig {
            distribution: DistributionType::Ideal { k: 8 },
            seed: None,
        };
        let mut sampler = config.sampler().unwrap();
        for _ in 0..50 {
            let degree = sampler.next_degree();
            assert!((1..=8).contains(&degree));
        }
    }

    #[test]
    fn test_display() {
        let config = DegreeConfig {
            distribution: DistributionType::Robust {
                k: 10,
                c: 0.1,
                delta: 0.05,
            },
            seed: Some(3),
        };
        assert_eq!(config.to_string(), "robust(k=10, c=0.1, delta=0.05) seed=3");
        assert_eq!(DistributionType::Ideal { k: 4 }.k(), 4);
    }
}
