//! MediMind HTTP host - axum router, route handlers, SSE reveal stream.
//!
//! Serves the single-page UI and the JSON endpoints behind it: symptom
//! vocabulary, search widget, and chat turns with per-session transcripts.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod sessions;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use sessions::SessionStore;
pub use state::AppState;
