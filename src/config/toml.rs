//! TOML configuration file parsing

use super::validator::validate_config;
use super::DegreeConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse and validate a TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<DegreeConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse and validate TOML configuration from a string
pub fn parse_toml_string(contents: &str) -> Result<DegreeConfig> {
    let config: DegreeConfig = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    validate_config(&config)?;

    Ok(config)
}
