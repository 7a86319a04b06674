//! Server-Sent Events (SSE) decoding.
//!
//! Chat completion endpoints stream `data:` events separated by blank
//! lines. Framing is done by `eventsource-stream`; this module adapts a
//! byte stream (usually a reqwest response body) into event payloads and
//! maps failures to `AiError`.

use std::fmt;

use eventsource_stream::{EventStreamError, Eventsource};
use futures_util::{Stream, StreamExt};

use crate::AiError;

/// Yield the data of each SSE event in `bytes` as it arrives. Multiple
/// `data:` lines of one event are joined with `\n`; event names are ignored.
///
/// Transport errors become `NetworkError`; undecodable framing becomes
/// `ParseError`.
pub fn sse_data<S, B, E>(bytes: S) -> impl Stream<Item = Result<String, AiError>> + Send
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]>,
    E: fmt::Display,
{
    bytes.eventsource().map(|result| match result {
        Ok(event) => Ok(event.data),
        Err(EventStreamError::Transport(e)) => Err(AiError::NetworkError(e.to_string())),
        Err(e) => Err(AiError::ParseError(e.to_string())),
    })
}
