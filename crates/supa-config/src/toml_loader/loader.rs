//! Core TOML config loading: read from path or platform default.

use std::path::Path;

use supa_common::ConfigError;
use tracing::{debug, info};

use crate::schema::SupaConfig;

use super::paths::default_config_path;

/// Parse a config from TOML text, filling missing fields with defaults.
pub fn parse_config(content: &str) -> Result<SupaConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from a specific TOML file path.
///
/// Values are not validated here; overrides may still change them.
pub fn load_from_path(path: &Path) -> Result<SupaConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = parse_config(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// A missing file is not an error: defaults are returned and nothing is
/// written to disk.
pub fn load_default() -> Result<SupaConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no config found at {}, using defaults", path.display());
            Ok(SupaConfig::default())
        }
        Err(e) => Err(e),
    }
}
