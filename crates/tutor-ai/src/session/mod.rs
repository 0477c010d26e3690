//! Conversation session management.
//!
//! A `ConversationSession` owns the message history of one conversation
//! and the small state machine that sequences a turn: user message in,
//! one completion request out, assistant reply (or an error) back.

mod chat;
mod manager;
mod types;

#[cfg(test)]
mod proptests;

pub use manager::ConversationSession;
pub use types::{SessionError, SessionState};
