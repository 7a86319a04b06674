//! Config path resolution.

use std::path::PathBuf;

use supa_common::ConfigError;

/// Directory holding `config.toml` and `secrets.toml`.
///
/// On macOS: `~/Library/Application Support/supa-chat`
/// On Linux: `~/.config/supa-chat`
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(base.join("supa-chat"))
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get the platform-specific default secrets file path.
pub fn default_secrets_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("secrets.toml"))
}
