use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CHAT_GREETING: &str = "Hello! How can I help you with your studies today?";

/// Shown in place of an assistant reply when the chat call fails.
pub const CHAT_FALLBACK_REPLY: &str = "Sorry, I'm having trouble connecting. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

/// Append-only chat history for one assistant view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatTranscript {
    entries: Vec<ChatEntry>,
}

impl ChatTranscript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript opened with the assistant greeting.
    #[must_use]
    pub fn with_greeting(at: DateTime<Utc>) -> Self {
        let mut transcript = Self::new();
        transcript.push(ChatRole::Assistant, CHAT_GREETING, at);
        transcript
    }

    pub fn push(&mut self, role: ChatRole, content: impl Into<String>, at: DateTime<Utc>) {
        self.entries.push(ChatEntry {
            role,
            content: content.into(),
            sent_at: at,
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }
}
