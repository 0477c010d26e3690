//! Session state and error types.

use crate::CompletionError;

/// Where a session is in the turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// A user turn has been appended and its completion is outstanding.
    AwaitingResponse,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Blank submissions are ignored rather than sent.
    #[error("input is empty")]
    EmptyInput,
    #[error("session is busy with another request")]
    Busy,
    #[error("no request is pending")]
    NotAwaiting,
    #[error(transparent)]
    Completion(#[from] CompletionError),
}
