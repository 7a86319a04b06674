//! Scripted client and recording surface shared by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::{future, stream, StreamExt};

use crate::session::Turn;
use crate::surface::ChatSurface;
use crate::{AiError, Completion, CompletionClient, DeltaStream, Message, Role, TokenUsage};

/// What the scripted client does for one request.
pub(crate) enum Reply {
    /// Stream these deltas, then end.
    Deltas(Vec<&'static str>),
    /// Stream these deltas, then fail with a network error.
    FailAfter(Vec<&'static str>),
    /// Fail before any stream exists.
    Refuse,
    /// Never produce a delta.
    Stall,
    /// Non-streamed reply.
    Full(&'static str),
    /// Non-streamed reply after a delay.
    Delayed(Duration, &'static str),
}

#[derive(Default)]
pub(crate) struct ScriptedClient {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<(String, Vec<Message>)>>,
}

impl ScriptedClient {
    pub(crate) fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request seen so far as (model, messages).
    pub(crate) fn requests(&self) -> Vec<(String, Vec<Message>)> {
        self.requests.lock().unwrap().clone()
    }

    fn next_reply(&self, model: &str, messages: &[Message]) -> Reply {
        self.requests
            .lock()
            .unwrap()
            .push((model.to_string(), messages.to_vec()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left")
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<Completion, AiError> {
        match self.next_reply(model, messages) {
            Reply::Full(text) => Ok(Completion {
                content: text.to_string(),
                usage: TokenUsage {
                    input_tokens: 7,
                    output_tokens: 2,
                },
            }),
            Reply::Delayed(delay, text) => {
                tokio::time::sleep(delay).await;
                Ok(Completion {
                    content: text.to_string(),
                    usage: TokenUsage::default(),
                })
            }
            Reply::Deltas(deltas) => Ok(Completion {
                content: deltas.concat(),
                usage: TokenUsage::default(),
            }),
            Reply::Refuse | Reply::FailAfter(_) => {
                Err(AiError::NetworkError("connection refused".into()))
            }
            Reply::Stall => future::pending().await,
        }
    }

    async fn stream_completion(
        &self,
        model: &str,
        messages: &[Message],
    ) -> Result<DeltaStream, AiError> {
        match self.next_reply(model, messages) {
            Reply::Deltas(deltas) => {
                Ok(stream::iter(deltas.into_iter().map(|d| Ok(d.to_string()))).boxed())
            }
            Reply::FailAfter(deltas) => {
                let items = deltas
                    .into_iter()
                    .map(|d| Ok(d.to_string()))
                    .chain(std::iter::once(Err(AiError::NetworkError(
                        "connection reset".into(),
                    ))));
                Ok(stream::iter(items).boxed())
            }
            Reply::Refuse => Err(AiError::ApiError("HTTP 503 Service Unavailable: ".into())),
            Reply::Stall => Ok(stream::pending().boxed()),
            Reply::Full(text) | Reply::Delayed(_, text) => {
                Ok(stream::iter(std::iter::once(Ok(text.to_string()))).boxed())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Shown {
    Turn(Role, String),
    History(usize),
    Begin,
    Delta(String),
    End,
    Error(String),
    /// Total tokens.
    Usage(u64),
}

/// Feeds scripted input lines and records everything displayed.
#[derive(Default)]
pub(crate) struct RecordingSurface {
    inputs: VecDeque<String>,
    pub(crate) shown: Vec<Shown>,
}

impl RecordingSurface {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_inputs(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            shown: Vec::new(),
        }
    }

    pub(crate) fn deltas(&self) -> Vec<String> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Delta(d) => Some(d.clone()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn errors(&self) -> Vec<String> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Error(e) => Some(e.clone()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl ChatSurface for RecordingSurface {
    async fn read_next_user_input(&mut self) -> Option<String> {
        self.inputs.pop_front()
    }

    fn display_turn(&mut self, turn: &Turn) {
        self.shown.push(Shown::Turn(turn.role, turn.content.clone()));
    }

    fn display_history(&mut self, turns: &[Turn]) {
        self.shown.push(Shown::History(turns.len()));
    }

    fn begin_assistant_turn(&mut self) {
        self.shown.push(Shown::Begin);
    }

    fn render_delta(&mut self, delta: &str) {
        self.shown.push(Shown::Delta(delta.to_string()));
    }

    fn end_assistant_turn(&mut self) {
        self.shown.push(Shown::End);
    }

    fn display_error(&mut self, message: &str) {
        self.shown.push(Shown::Error(message.to_string()));
    }

    fn display_usage(&mut self, usage: &TokenUsage) {
        self.shown.push(Shown::Usage(usage.total_tokens()));
    }
}
