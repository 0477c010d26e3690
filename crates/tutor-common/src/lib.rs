//! Shared error types, identifiers and defaults for the tutor workspace.

pub mod defaults;
pub mod errors;
pub mod id;

pub use errors::{ConfigError, TutorError};
pub use id::{new_id, new_request_id, SessionId};
