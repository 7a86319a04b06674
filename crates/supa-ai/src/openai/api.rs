//! CompletionClient trait implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::streaming::sse_data;
use crate::{AiError, Completion, CompletionClient, DeltaStream, Message};

use super::client::{build_request_body, delta_stream, parse_response, OpenAiClient};

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<Completion, AiError> {
        let body = build_request_body(model, messages, false);

        debug!(model, messages = messages.len(), "chat completion request");

        let response = self.post(&body).await?;
        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        let completion = parse_response(json)?;
        debug!(
            input_tokens = completion.usage.input_tokens,
            output_tokens = completion.usage.output_tokens,
            "chat completion finished"
        );
        Ok(completion)
    }

    async fn stream_completion(
        &self,
        model: &str,
        messages: &[Message],
    ) -> Result<DeltaStream, AiError> {
        let body = build_request_body(model, messages, true);

        debug!(model, messages = messages.len(), "chat completion streaming request");

        let response = self.post(&body).await?;
        Ok(delta_stream(sse_data(response.bytes_stream())))
    }
}
