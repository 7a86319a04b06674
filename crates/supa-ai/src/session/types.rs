//! Session cycle states and errors.

use crate::AiError;

/// Progress of the current request/response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleState {
    #[default]
    Idle,
    /// Request sent, no text received yet.
    AwaitingFirstDelta,
    /// At least one delta has been rendered.
    Streaming,
    /// Assistant turn appended.
    Finalized,
    /// Transport or protocol error; the transcript ends on the user turn.
    Failed,
}

impl CycleState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, CycleState::Finalized | CycleState::Failed)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The transcript does not end on a user turn.
    #[error("no user message is waiting for a reply")]
    NotAwaitingReply,

    #[error("completion failed: {0}")]
    CompletionFailure(#[source] AiError),
}
