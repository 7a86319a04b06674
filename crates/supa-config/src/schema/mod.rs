//! Configuration schema types for SUPA Chat.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults of the hosted SUPA endpoint.

mod chat;
mod endpoint;
mod secrets;

pub use chat::*;
pub use endpoint::*;
pub use secrets::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SupaConfig {
    pub endpoint: EndpointConfig,
    pub chat: ChatConfig,
    pub secrets: SecretsConfig,
}
