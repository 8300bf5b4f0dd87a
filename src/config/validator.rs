//! Configuration validation

use super::DegreeConfig;
use anyhow::Result;

/// Validate a complete configuration
pub fn validate_config(config: &DegreeConfig) -> Result<()> {
    if let Err(e) = config.distribution.validate() {
        anyhow::bail!("Invalid distribution {}: {}", config.distribution, e);
    }

    // The table is k f64s; refuse sizes that would not fit in memory anyway
    let k = config.distribution.k();
    if usize::try_from(k).is_err() {
        anyhow::bail!("k = {} is too large for this platform", k);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DistributionType;

    #[test]
    fn test_validate_config_ok() {
        let config = DegreeConfig {
            distribution: DistributionType::Robust {
                k: 1000,
                c: 0.1,
                delta: 0.05,
            },
            seed: None,
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_degenerate_spike() {
        let config = DegreeConfig {
            distribution: DistributionType::Robust {
                k: 10,
                c: 10.0,
                delta: 0.5,
            },
            seed: None,
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("spike index rounds to 0"), "{}", err);
    }

    #[test]
    fn test_validate_config_zero_k() {
        let config = DegreeConfig {
            distribution: DistributionType::Ideal { k: 0 },
            seed: Some(1),
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().starts_with("Invalid distribution ideal(k=0)"));
    }
}
