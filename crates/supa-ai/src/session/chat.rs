//! Request/response cycle methods for Session.

use std::future::Future;
use std::time::Duration;

use futures_util::StreamExt;
use tracing::{debug, warn};

use crate::surface::ChatSurface;
use crate::{AiError, CompletionClient, Message};

use super::manager::Session;
use super::types::{CycleState, SessionError};

impl Session {
    /// Append a user turn and show it. Blank input is ignored.
    ///
    /// Returns `true` when a turn was recorded and a reply should be
    /// requested.
    pub fn submit_user_input(&mut self, text: &str, surface: &mut dyn ChatSurface) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        if self.transcript.awaiting_reply() {
            debug!(session = %self.id.short(), "replacing unanswered user turn");
        }

        self.state = CycleState::Idle;
        let turn = self.transcript.push_user(text.to_string());
        surface.display_turn(turn);
        true
    }

    /// Stream the assistant's reply to the newest user turn.
    ///
    /// Deltas are rendered as they arrive. The assistant turn is appended
    /// only after the stream ends; on error nothing is appended and the
    /// transcript still ends on the user turn.
    pub async fn request_assistant_reply(
        &mut self,
        client: &dyn CompletionClient,
        surface: &mut dyn ChatSurface,
    ) -> Result<String, SessionError> {
        if !self.transcript.awaiting_reply() {
            return Err(SessionError::NotAwaitingReply);
        }

        let messages = self.build_messages();
        self.state = CycleState::AwaitingFirstDelta;
        debug!(
            session = %self.id.short(),
            model = %self.model,
            messages = messages.len(),
            "requesting streamed reply"
        );

        match self.stream_reply(client, &messages, surface).await {
            Ok(content) => {
                self.transcript.push_assistant(content.clone())?;
                self.state = CycleState::Finalized;
                debug!(session = %self.id.short(), chars = content.len(), "reply finalized");
                Ok(content)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Request the reply again after a failed cycle.
    pub async fn retry_reply(
        &mut self,
        client: &dyn CompletionClient,
        surface: &mut dyn ChatSurface,
    ) -> Result<String, SessionError> {
        debug!(session = %self.id.short(), "retrying reply");
        self.request_assistant_reply(client, surface).await
    }

    /// Fetch the whole reply in one response, then show it.
    ///
    /// Bounded by the request timeout rather than the idle timeout, since
    /// no text arrives until the reply is complete.
    pub async fn complete_reply(
        &mut self,
        client: &dyn CompletionClient,
        surface: &mut dyn ChatSurface,
    ) -> Result<String, SessionError> {
        if !self.transcript.awaiting_reply() {
            return Err(SessionError::NotAwaitingReply);
        }

        let messages = self.build_messages();
        self.state = CycleState::AwaitingFirstDelta;
        debug!(session = %self.id.short(), model = %self.model, "requesting reply");

        let request = client.complete(&self.model, &messages);
        let completion = match within(self.request_timeout, request).await.and_then(|r| r) {
            Ok(completion) => completion,
            Err(e) => return Err(self.fail(e)),
        };

        self.usage.add(&completion.usage);
        let turn = self.transcript.push_assistant(completion.content)?;
        surface.display_turn(turn);
        self.state = CycleState::Finalized;
        Ok(turn.content.clone())
    }

    async fn stream_reply(
        &mut self,
        client: &dyn CompletionClient,
        messages: &[Message],
        surface: &mut dyn ChatSurface,
    ) -> Result<String, AiError> {
        let mut stream =
            within(self.idle_timeout, client.stream_completion(&self.model, messages)).await??;

        surface.begin_assistant_turn();
        let mut content = String::new();

        let outcome = loop {
            let next = match within(self.idle_timeout, stream.next()).await {
                Ok(next) => next,
                Err(e) => break Err(e),
            };

            match next {
                None => break Ok(()),
                Some(Ok(delta)) => {
                    if delta.is_empty() {
                        continue;
                    }
                    self.state = CycleState::Streaming;
                    surface.render_delta(&delta);
                    content.push_str(&delta);
                }
                Some(Err(e)) => break Err(e),
            }
        };

        surface.end_assistant_turn();
        outcome.map(|()| content)
    }

    fn fail(&mut self, error: AiError) -> SessionError {
        warn!(
            session = %self.id.short(),
            state = ?self.state,
            "completion failed: {error}"
        );
        self.state = CycleState::Failed;
        SessionError::CompletionFailure(error)
    }
}

/// Await `future`, giving up after `limit` if one is set.
async fn within<F: Future>(limit: Option<Duration>, future: F) -> Result<F::Output, AiError> {
    match limit {
        Some(limit) => tokio::time::timeout(limit, future)
            .await
            .map_err(|_| AiError::Timeout),
        None => Ok(future.await),
    }
}
