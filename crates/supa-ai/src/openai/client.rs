//! Client struct, request building, and response parsing.

use futures_util::{future, Stream, StreamExt, TryStreamExt};
use tracing::warn;

use crate::{AiError, Completion, DeltaStream, Message, TokenUsage};

use super::config::OpenAiConfig;

/// Marks the end of a streamed completion.
pub(crate) const DONE_MARKER: &str = "[DONE]";

/// OpenAI-compatible chat completion client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    /// No overall request timeout is set: streamed replies can run long, so
    /// stalls are bounded per delta by the session instead.
    pub fn new(config: OpenAiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    /// POST a request body and check the status.
    pub(crate) async fn post(&self, body: &serde_json::Value) -> Result<reqwest::Response, AiError> {
        let response = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        Ok(response)
    }
}

/// Build the JSON request body for the chat completions route.
pub(crate) fn build_request_body(model: &str, messages: &[Message], stream: bool) -> serde_json::Value {
    serde_json::json!({
        "model": model,
        "messages": messages,
        "stream": stream,
    })
}

/// Parse a non-streaming response.
pub(crate) fn parse_response(json: serde_json::Value) -> Result<Completion, AiError> {
    if let Some(error) = error_field(&json) {
        return Err(AiError::ApiError(error_message(error)));
    }

    let choice = json["choices"]
        .get(0)
        .ok_or_else(|| AiError::ParseError("response contains no choices".into()))?;

    // `content` is null when the model produced no text
    let content = choice["message"]["content"]
        .as_str()
        .unwrap_or_default()
        .to_string();

    let usage = TokenUsage {
        input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
        output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
    };

    Ok(Completion { content, usage })
}

/// Extract the text delta from one streamed chunk.
///
/// Chunks without text (role announcements, finish reasons, usage) and
/// undecodable chunks yield `None`. An `error` object ends the stream.
pub(crate) fn parse_chunk(data: &str) -> Result<Option<String>, AiError> {
    let json: serde_json::Value = match serde_json::from_str(data) {
        Ok(json) => json,
        Err(e) => {
            warn!("skipping undecodable stream chunk: {e}");
            return Ok(None);
        }
    };

    if let Some(error) = error_field(&json) {
        return Err(AiError::ApiError(error_message(error)));
    }

    Ok(json["choices"][0]["delta"]["content"]
        .as_str()
        .filter(|text| !text.is_empty())
        .map(String::from))
}

/// Turn SSE event payloads into text deltas, stopping at `[DONE]`.
pub(crate) fn delta_stream<S>(events: S) -> DeltaStream
where
    S: Stream<Item = Result<String, AiError>> + Send + 'static,
{
    events
        .try_take_while(|data| future::ready(Ok(data.trim() != DONE_MARKER)))
        .try_filter_map(|data| future::ready(parse_chunk(&data)))
        .boxed()
}

/// Some servers send `"error": null` on successful chunks.
fn error_field(json: &serde_json::Value) -> Option<&serde_json::Value> {
    json.get("error").filter(|error| !error.is_null())
}

fn error_message(error: &serde_json::Value) -> String {
    error["message"]
        .as_str()
        .map(String::from)
        .unwrap_or_else(|| error.to_string())
}
