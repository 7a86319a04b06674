//! Chat engine for SUPA Chat.
//!
//! Provides an OpenAI-compatible chat completion client with:
//! - Streaming (SSE) support exposed as a single-pass delta stream
//! - A conversation `Session` that owns the transcript and turn-taking
//! - The interactive conversation loop driven by a `ChatSurface`

pub mod conversation;
pub mod openai;
pub mod session;
pub mod streaming;
pub mod surface;

#[cfg(test)]
mod testing;

use async_trait::async_trait;
use futures_util::stream::BoxStream;

pub use conversation::{run_conversation, ReplyMode};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use session::{CycleState, Session, SessionError, Transcript, Turn};
pub use surface::ChatSurface;

/// Lazy, single-pass sequence of assistant text deltas.
pub type DeltaStream = BoxStream<'static, Result<String, AiError>>;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Request a full reply and wait for it.
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<Completion, AiError>;

    /// Request a streamed reply. Errors before the first chunk are returned
    /// directly; later ones arrive as items of the stream.
    async fn stream_completion(
        &self,
        model: &str,
        messages: &[Message],
    ) -> Result<DeltaStream, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A non-streamed reply.
#[derive(Debug, Clone, Default)]
pub struct Completion {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }

    pub fn add(&mut self, other: &TokenUsage) {
        self.input_tokens = self.input_tokens.saturating_add(other.input_tokens);
        self.output_tokens = self.output_tokens.saturating_add(other.output_tokens);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}
