//! SUPA Chat configuration system.
//!
//! Provides TOML-based configuration with validation and secret lookup.
//! All config sections use sensible defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use supa_config::{load_config, require_secret, ConfigOverrides, SecretChain};
//!
//! let config = load_config(None, &ConfigOverrides::default()).expect("failed to load config");
//! let secrets = SecretChain::from_config(&config);
//! let token = require_secret(&secrets, &config.secrets.name);
//! ```

pub mod schema;
pub mod secrets;
pub mod toml_loader;
pub mod validation;

pub use schema::SupaConfig;
pub use secrets::{require_secret, EnvSecrets, FileSecrets, SecretChain, SecretSource};

use std::path::Path;

use supa_common::ConfigError;

/// Values given on the command line, applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub model: Option<String>,
    pub stream: Option<bool>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut SupaConfig) {
        if let Some(ref model) = self.model {
            config.endpoint.model = model.clone();
        }
        if let Some(stream) = self.stream {
            config.endpoint.stream = stream;
        }
    }
}

/// Load config from `path`, or from the platform default when `None`.
///
/// An explicit path must exist. `overrides` are applied before the result
/// is validated.
pub fn load_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<SupaConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    overrides.apply(&mut config);
    validation::validate(&config)?;
    Ok(config)
}
