//! In-memory chat sessions for the HTTP host.
//!
//! Each session owns one [`Conversation`]. Sessions end when deleted, when
//! they sit idle past the store's time-to-live, or when the process exits;
//! nothing is persisted.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use uuid::Uuid;

use medimind_chat::{ChatError, Conversation};
use medimind_core::ConversationMessage;

#[derive(Debug)]
struct Session {
    conversation: Conversation,
    last_used: Instant,
}

#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, Session>>,
    ttl: Duration,
}

impl SessionStore {
    /// A store that drops sessions idle for `ttl` or longer.
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    // Transcripts are append-only, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the map with every expired session already removed.
    fn live(&self, now: Instant) -> MutexGuard<'_, HashMap<Uuid, Session>> {
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, s| now.saturating_duration_since(s.last_used) < self.ttl);
        let expired = before - sessions.len();
        if expired > 0 {
            tracing::debug!(expired, remaining = sessions.len(), "Idle chat sessions dropped");
        }
        sessions
    }

    /// Run `f` against the conversation for `session_id`.
    ///
    /// With no id a new conversation is started; it is only kept if `f`
    /// succeeds. An unknown or expired id is an error.
    pub fn with_session<T, F>(&self, session_id: Option<Uuid>, f: F) -> Result<(Uuid, T), ChatError>
    where
        F: FnOnce(&mut Conversation) -> Result<T, ChatError>,
    {
        self.with_session_at(Instant::now(), session_id, f)
    }

    fn with_session_at<T, F>(
        &self,
        now: Instant,
        session_id: Option<Uuid>,
        f: F,
    ) -> Result<(Uuid, T), ChatError>
    where
        F: FnOnce(&mut Conversation) -> Result<T, ChatError>,
    {
        let mut sessions = self.live(now);
        match session_id {
            Some(id) => {
                let session = sessions.get_mut(&id).ok_or(ChatError::SessionNotFound(id))?;
                let value = f(&mut session.conversation)?;
                session.last_used = now;
                Ok((id, value))
            }
            None => {
                let mut conversation = Conversation::new();
                let value = f(&mut conversation)?;
                let id = conversation.id();
                sessions.insert(
                    id,
                    Session {
                        conversation,
                        last_used: now,
                    },
                );
                tracing::debug!(session_id = %id, "Chat session started");
                Ok((id, value))
            }
        }
    }

    /// A copy of the transcript for `session_id`.
    pub fn messages(&self, session_id: Uuid) -> Result<Vec<ConversationMessage>, ChatError> {
        self.live(Instant::now())
            .get(&session_id)
            .map(|s| s.conversation.messages().to_vec())
            .ok_or(ChatError::SessionNotFound(session_id))
    }

    /// End a session, dropping its transcript.
    pub fn remove(&self, session_id: Uuid) -> Result<(), ChatError> {
        match self.live(Instant::now()).remove(&session_id) {
            Some(session) => {
                tracing::debug!(
                    session_id = %session_id,
                    started_at = %session.conversation.started_at(),
                    messages = session.conversation.len(),
                    "Chat session ended"
                );
                Ok(())
            }
            None => Err(ChatError::SessionNotFound(session_id)),
        }
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.live(Instant::now()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
