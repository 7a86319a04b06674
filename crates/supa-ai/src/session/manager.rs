//! Session struct and transcript access.

use std::time::Duration;

use supa_common::SessionId;

use crate::{Message, TokenUsage};

use super::transcript::{Transcript, Turn};
use super::types::CycleState;

/// A conversation with one completion endpoint and model.
pub struct Session {
    pub(super) id: SessionId,
    pub(super) transcript: Transcript,
    /// Model identifier sent with every request.
    pub(super) model: String,
    /// System prompt (prepended to every request, never stored as a turn).
    pub(super) system_prompt: Option<String>,
    /// Longest wait for the next delta; `None` waits forever.
    pub(super) idle_timeout: Option<Duration>,
    /// Longest wait for a whole non-streamed reply.
    pub(super) request_timeout: Option<Duration>,
    pub(super) state: CycleState,
    /// Usage reported by non-streamed replies.
    pub(super) usage: TokenUsage,
}

impl Session {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            transcript: Transcript::new(),
            model: model.into(),
            system_prompt: None,
            idle_timeout: None,
            request_timeout: None,
            state: CycleState::Idle,
            usage: TokenUsage::default(),
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_idle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn turns(&self) -> &[Turn] {
        self.transcript.turns()
    }

    pub fn awaiting_reply(&self) -> bool {
        self.transcript.awaiting_reply()
    }

    /// State of the most recent request/response cycle.
    pub fn state(&self) -> CycleState {
        self.state
    }

    pub fn usage(&self) -> &TokenUsage {
        &self.usage
    }

    /// Request messages: the system prompt, then every turn in order.
    pub(crate) fn build_messages(&self) -> Vec<Message> {
        let mut msgs = Vec::with_capacity(self.transcript.len() + 1);
        if let Some(ref system) = self.system_prompt {
            msgs.push(Message::system(system.clone()));
        }
        msgs.extend(self.transcript.turns().iter().cloned());
        msgs
    }
}
