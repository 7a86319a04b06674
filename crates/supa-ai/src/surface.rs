//! The UI side of a conversation.

use async_trait::async_trait;

use crate::session::Turn;
use crate::TokenUsage;

/// Input capture and incremental display, implemented by the front end.
#[async_trait]
pub trait ChatSurface: Send {
    /// Wait for the next line of user input. `None` ends the conversation.
    async fn read_next_user_input(&mut self) -> Option<String>;

    /// Show one complete turn.
    fn display_turn(&mut self, turn: &Turn);

    /// Show the whole scrollback.
    fn display_history(&mut self, turns: &[Turn]) {
        for turn in turns {
            self.display_turn(turn);
        }
    }

    /// Open the assistant turn that the following deltas belong to.
    fn begin_assistant_turn(&mut self);

    /// Append one non-empty fragment to the open assistant turn.
    fn render_delta(&mut self, delta: &str);

    /// Close the open assistant turn, whether or not the stream succeeded.
    fn end_assistant_turn(&mut self);

    fn display_error(&mut self, message: &str);

    /// Show the tokens spent so far. Ignored unless a surface overrides it.
    fn display_usage(&mut self, _usage: &TokenUsage) {}
}
