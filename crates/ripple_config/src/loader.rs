//! Configuration file loading and validation.

use std::path::Path;

use crate::error::ConfigError;
use crate::types::RippleConfig;

/// Loads and validates a `ripple.toml` configuration file.
pub fn load_config(path: &Path) -> Result<RippleConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<RippleConfig, ConfigError> {
    let config: RippleConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that configuration values are usable.
fn validate_config(config: &RippleConfig) -> Result<(), ConfigError> {
    if config.graph.file.is_empty() {
        return Err(ConfigError::ValidationError(
            "graph.file must not be empty".to_string(),
        ));
    }
    if let Some(seed) = &config.hash.seed {
        if seed.is_empty() {
            return Err(ConfigError::ValidationError(
                "hash.seed must not be empty; omit it for an unseeded run".to_string(),
            ));
        }
    }
    Ok(())
}
