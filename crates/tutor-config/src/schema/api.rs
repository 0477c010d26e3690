//! Completion service endpoint and transport settings.

use serde::{Deserialize, Serialize};
use tutor_common::defaults::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_CREDENTIAL_ENV,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of an OpenAI-compatible API (no trailing `/chat/completions`).
    pub base_url: String,
    /// Environment variable holding the credential. The key itself never
    /// lives in the config file.
    pub credential_env: String,
    /// TCP connect timeout in seconds (valid range: 1-300).
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credential_env: DEFAULT_CREDENTIAL_ENV.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
