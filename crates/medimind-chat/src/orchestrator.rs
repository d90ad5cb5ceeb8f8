//! Chat orchestrator: runs one turn against the dataset and a transcript.
//!
//! A turn moves through `Idle -> Detecting -> Composing -> Appended -> Idle`.
//! The only state that outlives a turn is what it appended to the
//! [`Conversation`] passed in by the caller.

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use medimind_core::config::ChatConfig;
use medimind_core::{Dataset, MatchResult};

use crate::context::Conversation;
use crate::error::ChatError;
use crate::response::{detect_symptom, ResponseComposer};
use crate::reveal::RevealFrames;

// =============================================================================
// TurnPhase
// =============================================================================

/// Phase of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    Idle,
    Detecting,
    Composing,
    /// User message and reply are both in the transcript.
    Appended,
}

impl TurnPhase {
    /// The phase that follows this one in a successful turn.
    pub fn next(self) -> TurnPhase {
        match self {
            TurnPhase::Idle => TurnPhase::Detecting,
            TurnPhase::Detecting => TurnPhase::Composing,
            TurnPhase::Composing => TurnPhase::Appended,
            TurnPhase::Appended => TurnPhase::Idle,
        }
    }
}

// =============================================================================
// TurnOutcome
// =============================================================================

/// Result of a completed turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnOutcome {
    pub reply: String,
    pub detected_symptom: Option<String>,
    pub matched: Option<MatchResult>,
}

impl TurnOutcome {
    /// Frames for revealing the reply incrementally.
    pub fn frames(&self) -> RevealFrames {
        RevealFrames::new(self.reply.clone())
    }
}

// =============================================================================
// ChatOrchestrator
// =============================================================================

/// Coordinates validation, detection, composition and transcript updates.
pub struct ChatOrchestrator {
    dataset: Arc<Dataset>,
    composer: ResponseComposer,
    max_message_length: usize,
}

impl ChatOrchestrator {
    pub fn new(dataset: Arc<Dataset>, config: &ChatConfig) -> Self {
        Self {
            dataset,
            composer: ResponseComposer::new(),
            max_message_length: config.max_message_length,
        }
    }

    /// Handle one user message, appending the turn to `conversation`.
    ///
    /// On error the transcript is left untouched.
    pub fn handle_turn(
        &self,
        conversation: &mut Conversation,
        message: &str,
    ) -> Result<TurnOutcome, ChatError> {
        self.handle_turn_with(conversation, message, &mut rand::rng())
    }

    /// Like [`ChatOrchestrator::handle_turn`], drawing phrasing from `rng`.
    pub fn handle_turn_with<R: Rng + ?Sized>(
        &self,
        conversation: &mut Conversation,
        message: &str,
        rng: &mut R,
    ) -> Result<TurnOutcome, ChatError> {
        self.validate(message)?;

        let phase = self.advance(conversation, TurnPhase::Idle);
        let symptom = detect_symptom(message, self.dataset.symptoms());

        let phase = self.advance(conversation, phase);
        let composed = self.composer.compose(symptom, &self.dataset, rng);
        conversation.push_turn(message, composed.reply.clone());

        let phase = self.advance(conversation, phase);
        let outcome = TurnOutcome {
            reply: composed.reply,
            detected_symptom: composed.detected_symptom,
            matched: composed.consumed_match,
        };
        tracing::info!(
            session_id = %conversation.id(),
            detected = outcome.detected_symptom.as_deref().unwrap_or("none"),
            messages = conversation.len(),
            "Chat turn complete"
        );
        self.advance(conversation, phase);

        Ok(outcome)
    }

    fn validate(&self, message: &str) -> Result<(), ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if message.chars().count() > self.max_message_length {
            return Err(ChatError::MessageTooLong(self.max_message_length));
        }
        Ok(())
    }

    fn advance(&self, conversation: &Conversation, phase: TurnPhase) -> TurnPhase {
        let next = phase.next();
        tracing::debug!(session_id = %conversation.id(), from = ?phase, to = ?next, "Turn phase");
        next
    }
}
