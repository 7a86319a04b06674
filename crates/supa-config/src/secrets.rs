//! Secret lookup.
//!
//! The API token is read once at startup, first from the process
//! environment and then from a `secrets.toml` file of flat
//! `NAME = "value"` entries. A token that is absent (or blank) in every
//! source is a hard stop: `ConfigError::ConfigurationMissing`.

use std::collections::HashMap;
use std::path::Path;

use supa_common::ConfigError;
use tracing::{debug, warn};

use crate::schema::SupaConfig;
use crate::toml_loader::default_secrets_path;

/// Anything that can answer "what is the value of secret `name`?".
pub trait SecretSource {
    fn get_secret(&self, name: &str) -> Option<String>;
}

/// Reads secrets from environment variables.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSecrets;

impl SecretSource for EnvSecrets {
    fn get_secret(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Secrets parsed from a TOML file.
#[derive(Default, Clone)]
pub struct FileSecrets {
    values: HashMap<String, String>,
}

impl std::fmt::Debug for FileSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.values.keys().collect();
        names.sort();
        f.debug_struct("FileSecrets").field("names", &names).finish()
    }
}

impl FileSecrets {
    /// Parse `NAME = "value"` pairs. Non-string values are ignored.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse secrets: {e}")))?;

        let values = table
            .into_iter()
            .filter_map(|(key, value)| match value {
                toml::Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect();

        Ok(Self { values })
    }

    /// Load a secrets file. A missing file yields an empty source.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("no secrets file at {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::parse(&content)
    }
}

impl SecretSource for FileSecrets {
    fn get_secret(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

impl SecretSource for HashMap<String, String> {
    fn get_secret(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Tries each source in order; the first hit wins.
#[derive(Default)]
pub struct SecretChain {
    sources: Vec<Box<dyn SecretSource + Send + Sync>>,
}

impl SecretChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl SecretSource + Send + Sync + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Environment first, then the configured (or default) secrets file.
    ///
    /// An unreadable secrets file is logged and skipped so the environment
    /// can still supply the token.
    pub fn from_config(config: &SupaConfig) -> Self {
        let chain = Self::new().with_source(EnvSecrets);

        let path = match &config.secrets.file {
            Some(path) => Some(path.clone()),
            None => default_secrets_path().ok(),
        };

        match path.map(|p| FileSecrets::load(&p)) {
            Some(Ok(file)) => chain.with_source(file),
            Some(Err(e)) => {
                warn!("ignoring secrets file: {e}");
                chain
            }
            None => chain,
        }
    }
}

impl SecretSource for SecretChain {
    fn get_secret(&self, name: &str) -> Option<String> {
        self.sources.iter().find_map(|s| s.get_secret(name))
    }
}

/// Look up a required secret. Blank values count as missing.
pub fn require_secret(source: &dyn SecretSource, name: &str) -> Result<String, ConfigError> {
    match source.get_secret(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::ConfigurationMissing(name.to_string())),
    }
}
