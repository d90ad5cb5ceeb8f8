//! Session-scoped conversation transcript.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use medimind_core::ConversationMessage;

/// The ordered transcript of one interactive session.
///
/// Messages can only be appended; existing entries are never changed. The
/// transcript lives as long as the session that owns it.
#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    id: Uuid,
    started_at: DateTime<Utc>,
    messages: Vec<ConversationMessage>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// Start an empty conversation with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            messages: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: ConversationMessage) {
        self.messages.push(message);
    }

    /// Append a completed turn: the user message, then the reply.
    pub fn push_turn(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.messages.push(ConversationMessage::user(user));
        self.messages.push(ConversationMessage::assistant(assistant));
    }
}
