//! Chat surface settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Header shown above the conversation.
    pub title: String,
    /// Hint shown before the first prompt.
    pub placeholder: String,
    /// Optional system message prepended to every request.
    pub system_prompt: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            title: "SUPA Chat".to_string(),
            placeholder: "What would you like to talk about?".to_string(),
            system_prompt: None,
        }
    }
}
