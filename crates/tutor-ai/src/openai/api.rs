//! CompletionClient trait implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{Completion, CompletionClient, CompletionError, GenerationParams, Message};

use super::client::{error_for_status, OpenAiClient};

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<Completion, CompletionError> {
        let body = self.build_request_body(messages, params);

        debug!(
            model = %params.model,
            messages = messages.len(),
            "OpenAI chat completion request"
        );

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = error_for_status(status, &text);
            warn!(%status, error = %err, "OpenAI request rejected");
            return Err(err);
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        let completion = self.parse_response(json)?;
        debug!(
            input_tokens = completion.usage.input_tokens,
            output_tokens = completion.usage.output_tokens,
            "OpenAI chat completion received"
        );
        Ok(completion)
    }
}
