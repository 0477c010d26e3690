//! Default generation and endpoint settings shared by the config schema and
//! the completion client.

pub const DEFAULT_MODEL: &str = "gpt-5-nano";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 500;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CREDENTIAL_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
