//! Application state shared across all route handlers.
//!
//! AppState holds the read-only dataset, the chat orchestrator and the
//! session store. It is passed to handlers via axum's State extractor.

use std::sync::Arc;
use std::time::{Duration, Instant};

use medimind_chat::ChatOrchestrator;
use medimind_core::config::MedimindConfig;
use medimind_core::Dataset;
use medimind_ui::{render_page, Stylesheet};

use crate::sessions::SessionStore;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks. The only
/// mutable part is the session store.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<MedimindConfig>,
    /// Loaded once at startup; never re-read.
    pub dataset: Arc<Dataset>,
    pub orchestrator: Arc<ChatOrchestrator>,
    pub sessions: Arc<SessionStore>,
    /// Page HTML, rendered once from the vocabulary and stylesheet.
    pub page: Arc<str>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: MedimindConfig, dataset: Arc<Dataset>, stylesheet: &Stylesheet) -> Self {
        let orchestrator = ChatOrchestrator::new(Arc::clone(&dataset), &config.chat);
        let page: Arc<str> = render_page(dataset.symptoms(), stylesheet).into();
        let sessions = SessionStore::new(Duration::from_secs(config.chat.session_ttl_secs));
        Self {
            config: Arc::new(config),
            dataset,
            orchestrator: Arc::new(orchestrator),
            sessions: Arc::new(sessions),
            page,
            start_time: Instant::now(),
        }
    }
}
