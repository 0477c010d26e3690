//! Turn sequencing: begin a turn, finish it, or do both around a client call.

use tracing::{debug, warn};
use tutor_common::new_request_id;

use crate::{Completion, CompletionClient, CompletionError, CompletionRequest};

use super::manager::ConversationSession;
use super::types::{SessionError, SessionState};

impl ConversationSession {
    /// Append the user's text and move to `AwaitingResponse`, returning the
    /// request to send.
    ///
    /// Fails with `Busy` while a previous turn is unfinished and with
    /// `EmptyInput` for blank text; neither failure touches the history.
    pub fn begin_turn(&mut self, text: impl Into<String>) -> Result<CompletionRequest, SessionError> {
        if self.state == SessionState::AwaitingResponse {
            return Err(SessionError::Busy);
        }

        self.add_user_message(text)?;
        self.state = SessionState::AwaitingResponse;

        Ok(CompletionRequest {
            messages: self.history.clone(),
            params: self.params.clone(),
        })
    }

    /// Apply the outcome of the pending request and return to `Idle`.
    ///
    /// On success the reply is appended and returned. On failure the
    /// history stays as it was, so the user's message is kept and can be
    /// resubmitted.
    pub fn finish_turn(
        &mut self,
        result: Result<Completion, CompletionError>,
    ) -> Result<String, SessionError> {
        if self.state != SessionState::AwaitingResponse {
            return Err(SessionError::NotAwaiting);
        }
        self.state = SessionState::Idle;

        match result {
            Ok(completion) => {
                self.tracker.record(&self.params.model, &completion.usage);
                self.add_assistant_message(completion.content.clone());
                Ok(completion.content)
            }
            Err(err) => {
                warn!(session = %self.id, error = %err, "Completion failed");
                Err(SessionError::Completion(err))
            }
        }
    }

    /// Run one full turn against `client`.
    ///
    /// If the returned future is dropped before it resolves, the session
    /// stays in `AwaitingResponse` until [`reset`](Self::reset).
    pub async fn submit(
        &mut self,
        client: &dyn CompletionClient,
        text: impl Into<String>,
    ) -> Result<String, SessionError> {
        let request = self.begin_turn(text)?;
        let request_id = new_request_id();

        debug!(
            session = %self.id,
            request = %request_id,
            messages = request.messages.len(),
            "Sending completion request"
        );

        let result = client.complete(&request.messages, &request.params).await;

        debug!(session = %self.id, request = %request_id, ok = result.is_ok(), "Completion finished");
        self.finish_turn(result)
    }
}
