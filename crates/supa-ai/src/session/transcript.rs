//! Ordered, alternating conversation history.

use crate::{Message, Role};

use super::types::SessionError;

/// One entry of the transcript. Only user and assistant roles occur.
pub type Turn = Message;

/// User and assistant turns, strictly alternating and starting with a user
/// turn. Turns are never removed.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// True when the newest turn is a user turn without a reply.
    pub fn awaiting_reply(&self) -> bool {
        matches!(self.turns.last(), Some(turn) if turn.role == Role::User)
    }

    /// Append a user turn, or replace the text of a user turn whose reply
    /// failed so the roles keep alternating.
    pub(crate) fn push_user(&mut self, content: String) -> &Turn {
        if self.awaiting_reply() {
            let idx = self.turns.len() - 1;
            self.turns[idx].content = content;
        } else {
            self.turns.push(Message::user(content));
        }
        &self.turns[self.turns.len() - 1]
    }

    pub(crate) fn push_assistant(&mut self, content: String) -> Result<&Turn, SessionError> {
        if !self.awaiting_reply() {
            return Err(SessionError::NotAwaitingReply);
        }
        self.turns.push(Message::assistant(content));
        Ok(&self.turns[self.turns.len() - 1])
    }
}
