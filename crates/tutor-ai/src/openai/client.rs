//! OpenAI client struct, request building, and response parsing.

use tutor_common::ConfigError;

use crate::{Completion, CompletionError, GenerationParams, Message, TokenUsage};

use super::config::OpenAiConfig;

/// Longest slice of an error body carried into a `CompletionError`.
const ERROR_BODY_LIMIT: usize = 200;

/// OpenAI Chat Completions client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    /// Build a client, failing fast when no usable credential is configured.
    pub fn new(config: OpenAiConfig) -> Result<Self, ConfigError> {
        if config.api_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential(
                "OpenAI API key is empty".into(),
            ));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ConfigError::ValidationError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Build the JSON request body for the Chat Completions API.
    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> serde_json::Value {
        serde_json::json!({
            "model": params.model,
            "messages": messages,
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
        })
    }

    /// Parse a successful response body into the reply text and usage.
    pub(crate) fn parse_response(
        &self,
        json: serde_json::Value,
    ) -> Result<Completion, CompletionError> {
        let first = json["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .ok_or_else(|| CompletionError::MalformedResponse("no choices in response".into()))?;

        let content = first["message"]["content"]
            .as_str()
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                let reason = first["finish_reason"].as_str().unwrap_or("unknown");
                CompletionError::MalformedResponse(format!(
                    "empty reply (finish_reason: {reason})"
                ))
            })?
            .to_string();

        let usage = TokenUsage {
            input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(Completion { content, usage })
    }
}

/// Map a non-success HTTP status and its body to a `CompletionError`.
pub(crate) fn error_for_status(status: reqwest::StatusCode, body: &str) -> CompletionError {
    let detail = error_detail(body);
    match status {
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
            CompletionError::Auth(format!("HTTP {status}: {detail}"))
        }
        reqwest::StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimited(detail),
        _ => CompletionError::Api(format!("HTTP {status}: {detail}")),
    }
}

/// Prefer the API's own `error.message`; fall back to the raw body.
fn error_detail(body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.to_string());
    message.chars().take(ERROR_BODY_LIMIT).collect()
}
