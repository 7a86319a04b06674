//! The interactive conversation loop.
//!
//! Reads input from a `ChatSurface` until it is exhausted, handling a few
//! slash commands and running one request/response cycle per message.

use tracing::{debug, info};

use crate::session::{Session, SessionError};
use crate::surface::ChatSurface;
use crate::CompletionClient;

/// How assistant replies are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplyMode {
    /// Render deltas as they arrive.
    #[default]
    Streaming,
    /// Wait for the full reply, then show it.
    Blocking,
}

/// Commands typed on their own line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/quit` or `/exit`
    Quit,
    /// `/retry`: request the reply to the unanswered message again.
    Retry,
    /// `/history`: show the transcript again, with token usage when known.
    History,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Text(String),
}

/// Classify a line of input. Unknown `/words` are sent as text.
pub fn parse_input(line: &str) -> Input {
    match line.trim() {
        "/quit" | "/exit" => Input::Command(Command::Quit),
        "/retry" => Input::Command(Command::Retry),
        "/history" => Input::Command(Command::History),
        _ => Input::Text(line.to_string()),
    }
}

/// Drive `session` until the surface runs out of input or the user quits.
///
/// Failed cycles are reported through the surface and never end the loop.
pub async fn run_conversation(
    session: &mut Session,
    client: &dyn CompletionClient,
    surface: &mut dyn ChatSurface,
    mode: ReplyMode,
) {
    info!(session = %session.id().short(), model = %session.model(), "conversation started");
    surface.display_history(session.turns());

    while let Some(line) = surface.read_next_user_input().await {
        match parse_input(&line) {
            Input::Command(Command::Quit) => break,
            Input::Command(Command::History) => {
                surface.display_history(session.turns());
                if session.usage().total_tokens() > 0 {
                    surface.display_usage(session.usage());
                }
            }
            Input::Command(Command::Retry) => {
                if !session.awaiting_reply() {
                    surface.display_error("nothing to retry");
                    continue;
                }
                let result = session.retry_reply(client, surface).await;
                report(result, surface);
            }
            Input::Text(text) => {
                if !session.submit_user_input(&text, surface) {
                    continue;
                }
                let result = match mode {
                    ReplyMode::Streaming => session.request_assistant_reply(client, surface).await,
                    ReplyMode::Blocking => session.complete_reply(client, surface).await,
                };
                report(result, surface);
            }
        }
    }

    info!(
        session = %session.id().short(),
        turns = session.turns().len(),
        tokens = session.usage().total_tokens(),
        "conversation ended"
    );
}

fn report(result: Result<String, SessionError>, surface: &mut dyn ChatSurface) {
    match result {
        Ok(reply) => debug!(chars = reply.len(), "reply received"),
        Err(SessionError::CompletionFailure(e)) => {
            surface.display_error(&format!("{e}. Send /retry or a new message to try again."));
        }
        Err(e) => surface.display_error(&e.to_string()),
    }
}
