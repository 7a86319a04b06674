//! Credential lookup settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SECRET_NAME: &str = "SUPA_API_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretsConfig {
    /// Name of the API token, looked up in the environment and the secrets file.
    pub name: String,
    /// Secrets file override. Defaults to `secrets.toml` next to `config.toml`.
    pub file: Option<PathBuf>,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SECRET_NAME.to_string(),
            file: None,
        }
    }
}
