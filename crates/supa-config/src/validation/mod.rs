//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod chat;
mod endpoint;
mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::SupaConfig;
use supa_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SupaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    endpoint::validate_endpoint(&mut errors, config);
    chat::validate_chat(&mut errors, config);
    chat::validate_secrets(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
