//! Completion endpoint settings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.supa.works/openai";
pub const DEFAULT_MODEL: &str = "qwen3:0.6b";

/// Where completions are requested from and how long to wait for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL of the OpenAI-compatible API (without `/chat/completions`).
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// TCP/TLS connect timeout in seconds (valid range: 1-300).
    pub connect_timeout_secs: u32,
    /// Maximum wait between two streamed deltas in seconds; 0 disables (max 3600).
    pub idle_timeout_secs: u32,
    /// Maximum wait for a whole non-streamed reply in seconds; 0 disables (max 3600).
    pub request_timeout_secs: u32,
    /// Stream replies token by token instead of waiting for the full answer.
    pub stream: bool,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            connect_timeout_secs: 10,
            idle_timeout_secs: 120,
            request_timeout_secs: 600,
            stream: true,
        }
    }
}
