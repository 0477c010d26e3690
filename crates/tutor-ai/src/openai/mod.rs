//! OpenAI Chat Completions client.
//!
//! Implements `CompletionClient` against `POST {base_url}/chat/completions`
//! (https://api.openai.com/v1 by default). Any OpenAI-compatible endpoint
//! works by changing the base URL.

mod api;
mod client;
mod config;


pub use client::OpenAiClient;
pub use config::OpenAiConfig;
