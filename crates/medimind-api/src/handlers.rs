//! Route handler functions for all API endpoints.
//!
//! Each handler extracts query/path/body input via axum extractors, works
//! against AppState, and returns JSON, HTML or an SSE stream.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio_stream::{Stream, StreamExt};
use uuid::Uuid;

use medimind_chat::TurnOutcome;
use medimind_core::{analyze_condition, ConversationMessage, MatchResult};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request / response types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// The selected symptom; absent is treated like the sentinel.
    pub symptom: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// "found", "not_found" or "no_symptom_selected".
    pub status: String,
    pub message: String,
    pub matches: Vec<MatchResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SymptomsResponse {
    pub symptoms: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub records: usize,
    pub symptoms: usize,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Continue an existing session; omit to start a new one.
    pub session_id: Option<Uuid>,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReplyResponse {
    pub session_id: Uuid,
    pub reply: String,
    pub detected_symptom: Option<String>,
    pub matched: Option<MatchResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessagesResponse {
    pub session_id: Uuid,
    pub messages: Vec<ConversationMessage>,
}

// =============================================================================
// Page and health
// =============================================================================

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        records: state.dataset.len(),
        symptoms: state.dataset.symptoms().len(),
    })
}

/// GET / and GET /ui - the rendered page.
pub async fn ui(State(state): State<AppState>) -> impl IntoResponse {
    Html(state.page.to_string())
}

// =============================================================================
// Search widget
// =============================================================================

/// GET /api/symptoms - the sorted vocabulary for the selector.
pub async fn symptoms(State(state): State<AppState>) -> Json<SymptomsResponse> {
    Json(SymptomsResponse {
        symptoms: state.dataset.symptoms().to_vec(),
    })
}

/// GET /api/search?symptom=..
///
/// Validation outcomes are user-facing messages, so every outcome is a 200.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let selection = params.symptom.unwrap_or_default();
    let outcome = analyze_condition(&selection, &state.dataset);
    Json(SearchResponse {
        status: outcome.status().to_string(),
        message: outcome.message(),
        matches: outcome.matches().to_vec(),
    })
}

// =============================================================================
// Chat
// =============================================================================

fn run_turn(state: &AppState, request: &ChatRequest) -> Result<(Uuid, TurnOutcome), ApiError> {
    let orchestrator = &state.orchestrator;
    let result = state.sessions.with_session(request.session_id, |conversation| {
        orchestrator.handle_turn(conversation, &request.message)
    })?;
    Ok(result)
}

/// POST /api/chat - run one turn and return the whole reply.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReplyResponse>, ApiError> {
    let (session_id, outcome) = run_turn(&state, &request)?;
    Ok(Json(ChatReplyResponse {
        session_id,
        reply: outcome.reply,
        detected_symptom: outcome.detected_symptom,
        matched: outcome.matched,
    }))
}

/// POST /api/chat/stream - run one turn and reveal the reply frame by frame.
///
/// Emits one `frame` event per reveal frame, spaced by
/// `chat.reveal_delay_ms`, then a `done` event carrying the session id.
pub async fn chat_stream(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let (session_id, outcome) = run_turn(&state, &request)?;
    let delay = Duration::from_millis(state.config.chat.reveal_delay_ms);

    // SSE fields cannot carry carriage returns.
    let frames = outcome
        .frames()
        .map(|frame| Event::default().event("frame").data(frame.replace('\r', "")));
    let done = std::iter::once(Event::default().event("done").data(session_id.to_string()));

    let events = frames.chain(done).map(Ok::<Event, Infallible>);
    let stream = tokio_stream::iter(events).throttle(delay);
    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

/// GET /api/chat/{id}/messages - the session transcript.
pub async fn chat_messages(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ChatMessagesResponse>, ApiError> {
    let messages = state.sessions.messages(session_id)?;
    Ok(Json(ChatMessagesResponse {
        session_id,
        messages,
    }))
}

/// DELETE /api/chat/{id} - end the session.
pub async fn end_chat(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.sessions.remove(session_id)?;
    Ok(StatusCode::NO_CONTENT)
}
