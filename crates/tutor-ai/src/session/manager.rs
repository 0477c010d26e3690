//! Session struct and history management.

use tracing::{debug, info};
use tutor_common::SessionId;

use crate::token_tracker::TokenTracker;
use crate::{GenerationParams, Message, Role};

use super::types::{SessionError, SessionState};

/// One conversation: a fixed system message followed by user and
/// assistant turns in the order they happened.
///
/// `history[0]` is always the system message. Only [`reset`](Self::reset)
/// shortens the history, and it never removes that first entry.
pub struct ConversationSession {
    pub(super) id: SessionId,
    /// Full history, system message first.
    pub(super) history: Vec<Message>,
    /// Parameters attached to every request built from this session.
    pub(super) params: GenerationParams,
    pub(super) state: SessionState,
    /// Token usage of all successful turns, kept across resets.
    pub(super) tracker: TokenTracker,
}

impl ConversationSession {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        let session = Self {
            id: SessionId::new(),
            history: vec![Message::system(system_prompt)],
            params: GenerationParams::default(),
            state: SessionState::Idle,
            tracker: TokenTracker::new(),
        };
        debug!(session = %session.id, "Conversation session created");
        session
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Append a user turn. Blank text (after trimming) is rejected and
    /// leaves the history untouched; accepted text is stored verbatim.
    pub fn add_user_message(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }
        self.history.push(Message::user(text));
        Ok(())
    }

    /// Append an assistant turn. Callers only do this in reply to the
    /// user message that is currently last.
    pub fn add_assistant_message(&mut self, text: impl Into<String>) {
        self.history.push(Message::assistant(text));
    }

    /// Drop every turn after the system message and return to `Idle`.
    pub fn reset(&mut self) {
        self.history.truncate(1);
        self.state = SessionState::Idle;
        info!(session = %self.id, "Conversation reset");
    }

    /// Everything except the system message, for display.
    pub fn visible_history(&self) -> &[Message] {
        &self.history[1..]
    }

    /// Full history including the system message.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn system_prompt(&self) -> &str {
        debug_assert_eq!(self.history[0].role, Role::System);
        &self.history[0].content
    }

    /// Number of messages in history, system message included.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// True when only the system message is present.
    pub fn is_empty(&self) -> bool {
        self.history.len() == 1
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn usage(&self) -> &TokenTracker {
        &self.tracker
    }
}
