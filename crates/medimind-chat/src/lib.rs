//! Chat surface for MediMind.
//!
//! Detects a symptom in free text, composes a templated reply from the
//! first matching record, keeps the session transcript and produces the
//! incremental reveal frames shown by the presentation layer.

pub mod context;
pub mod error;
pub mod orchestrator;
pub mod response;
pub mod reveal;

pub use context::Conversation;
pub use error::ChatError;
pub use orchestrator::{ChatOrchestrator, TurnOutcome, TurnPhase};
pub use response::{detect_symptom, ComposedReply, ResponseComposer, DISCLAIMER, FALLBACK_REPLY};
pub use reveal::{RevealFrames, CURSOR};
