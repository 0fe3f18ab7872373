use std::sync::Arc;

use study_core::model::{CHAT_FALLBACK_REPLY, ChatRole, ChatTranscript};
use tracing::{debug, warn};

use crate::Clock;
use crate::api::StudyApi;
use crate::error::ApiError;

/// A user message already appended to the transcript, awaiting its reply.
///
/// Owns its own gateway handle so the request can run without borrowing the
/// session.
pub struct PendingMessage {
    api: Arc<dyn StudyApi>,
    message: String,
}

impl PendingMessage {
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// # Errors
    ///
    /// Whatever the gateway returns; `ChatSession::complete` masks it.
    pub async fn fetch(&self) -> Result<String, ApiError> {
        self.api.chat(&self.message).await
    }
}

/// Conversation with the study assistant for one visit to the chat view.
pub struct ChatSession {
    api: Arc<dyn StudyApi>,
    clock: Clock,
    transcript: ChatTranscript,
    pending: bool,
}

impl ChatSession {
    /// Start a conversation seeded with the assistant greeting.
    #[must_use]
    pub fn new(api: Arc<dyn StudyApi>, clock: Clock) -> Self {
        let transcript = ChatTranscript::with_greeting(clock.now());
        Self {
            api,
            clock,
            transcript,
            pending: false,
        }
    }

    #[must_use]
    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Append the user entry and hand back the request to run.
    ///
    /// Returns `None` for blank input.
    pub fn begin(&mut self, raw: &str) -> Option<PendingMessage> {
        if raw.trim().is_empty() {
            return None;
        }
        self.transcript.push(ChatRole::User, raw, self.clock.now());
        self.pending = true;
        Some(PendingMessage {
            api: Arc::clone(&self.api),
            message: raw.to_string(),
        })
    }

    /// Append the assistant entry for a finished request.
    pub fn complete(&mut self, result: Result<String, ApiError>) {
        let reply = match result {
            Ok(reply) => {
                debug!(chars = reply.chars().count(), "assistant replied");
                reply
            }
            Err(err) => {
                warn!(error = %err, "chat request failed; showing fallback reply");
                CHAT_FALLBACK_REPLY.to_string()
            }
        };
        self.transcript
            .push(ChatRole::Assistant, reply, self.clock.now());
        self.pending = false;
    }

    /// `begin`, await the reply, then `complete`. Returns `false` for blank input.
    pub async fn send(&mut self, raw: &str) -> bool {
        let Some(pending) = self.begin(raw) else {
            return false;
        };
        let result = pending.fetch().await;
        self.complete(result);
        true
    }
}
