//! Integration tests for the MediMind HTTP host.
//!
//! Each test builds its own router over an in-memory dataset and drives it
//! with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use medimind_api::error::ErrorBody;
use medimind_api::handlers::{
    ChatMessagesResponse, ChatReplyResponse, HealthResponse, SearchResponse, SymptomsResponse,
};
use medimind_api::{create_router, AppState};
use medimind_chat::{DISCLAIMER, FALLBACK_REPLY};
use medimind_core::config::MedimindConfig;
use medimind_core::{Dataset, DiseaseRecord, Role};
use medimind_ui::Stylesheet;

// =============================================================================
// Helpers
// =============================================================================

fn flu_dataset() -> Dataset {
    Dataset::from_records(vec![
        DiseaseRecord::new(
            "Flu",
            "fever, cough, fatigue",
            "Paracetamol",
            "Rest, hydrate",
            "General Physician",
        ),
        DiseaseRecord::new("Cold", "cough, sneezing", "Rest", "Warm fluids", "General Physician"),
    ])
}

fn make_state_with(dataset: Dataset, stylesheet: Stylesheet) -> AppState {
    let mut config = MedimindConfig::default();
    config.chat.reveal_delay_ms = 0;
    AppState::new(config, Arc::new(dataset), &stylesheet)
}

fn make_state() -> AppState {
    make_state_with(flu_dataset(), Stylesheet::from_css("h1 { color: teal; }"))
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

/// Parse an SSE body into (event, data) pairs.
fn parse_sse(body: &str) -> Vec<(String, String)> {
    body.split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .filter_map(|block| {
            let mut event = None;
            let mut data = Vec::new();
            for line in block.lines() {
                if let Some(rest) = line.strip_prefix("event:") {
                    event = Some(rest.trim().to_string());
                } else if let Some(rest) = line.strip_prefix("data:") {
                    data.push(rest.strip_prefix(' ').unwrap_or(rest).to_string());
                }
            }
            event.map(|e| (e, data.join("\n")))
        })
        .collect()
}

// =============================================================================
// Page and health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let resp = create_router(make_state()).oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let health: HealthResponse = body_json(resp).await;
    assert_eq!(health.status, "healthy");
    assert_eq!(health.records, 2);
    assert_eq!(health.symptoms, 4);
}

#[tokio::test]
async fn test_ui_page_lists_symptoms() {
    let app = create_router(make_state());
    let resp = app.oneshot(get("/ui")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(body_bytes(resp).await).unwrap();
    assert!(html.contains("<title>MediMind AI Pro</title>"));
    assert!(html.contains("<option value=\"Select a symptom...\">"));
    assert!(html.contains("<option value=\"sneezing\">"));
    assert!(html.contains("h1 { color: teal; }"));
    assert!(!html.contains("CSS file not found."));
}

#[tokio::test]
async fn test_root_serves_page_with_missing_stylesheet_warning() {
    let app = create_router(make_state_with(flu_dataset(), Stylesheet::default()));
    let resp = app.oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(body_bytes(resp).await).unwrap();
    assert!(html.contains("CSS file not found."));
}

// =============================================================================
// Search widget
// =============================================================================

#[tokio::test]
async fn test_symptoms_sorted() {
    let resp = create_router(make_state())
        .oneshot(get("/api/symptoms"))
        .await
        .unwrap();
    let body: SymptomsResponse = body_json(resp).await;
    assert_eq!(body.symptoms, vec!["cough", "fatigue", "fever", "sneezing"]);
}

#[tokio::test]
async fn test_symptoms_empty_dataset() {
    let app = create_router(make_state_with(Dataset::default(), Stylesheet::default()));
    let resp = app.oneshot(get("/api/symptoms")).await.unwrap();
    let body: SymptomsResponse = body_json(resp).await;
    assert!(body.symptoms.is_empty());
}

#[tokio::test]
async fn test_search_found() {
    let resp = create_router(make_state())
        .oneshot(get("/api/search?symptom=cough"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: SearchResponse = body_json(resp).await;
    assert_eq!(body.status, "found");
    assert_eq!(body.message, "Analysis complete. Found 2 match(es).");
    let diseases: Vec<&str> = body.matches.iter().map(|m| m.disease.as_str()).collect();
    assert_eq!(diseases, vec!["Flu", "Cold"]);
}

#[tokio::test]
async fn test_search_match_uses_header_field_names() {
    let resp = create_router(make_state())
        .oneshot(get("/api/search?symptom=fever"))
        .await
        .unwrap();
    let body: Value = body_json(resp).await;
    assert_eq!(body["matches"][0]["Disease"], "Flu");
    assert_eq!(body["matches"][0]["Medications"], "Paracetamol");
    assert_eq!(body["matches"][0]["Precautions"], "Rest, hydrate");
    assert_eq!(body["matches"][0]["Doctor_Specialist"], "General Physician");
}

#[tokio::test]
async fn test_search_not_found() {
    let resp = create_router(make_state())
        .oneshot(get("/api/search?symptom=headache"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: SearchResponse = body_json(resp).await;
    assert_eq!(body.status, "not_found");
    assert_eq!(body.message, "No disease found in our current database.");
    assert!(body.matches.is_empty());
}

#[tokio::test]
async fn test_search_sentinel_and_missing_param() {
    let app = create_router(make_state());
    let resp = app
        .clone()
        .oneshot(get("/api/search?symptom=Select%20a%20symptom..."))
        .await
        .unwrap();
    let body: SearchResponse = body_json(resp).await;
    assert_eq!(body.status, "no_symptom_selected");
    assert_eq!(body.message, "Please select a valid symptom first.");

    let resp = app.oneshot(get("/api/search")).await.unwrap();
    let body: SearchResponse = body_json(resp).await;
    assert_eq!(body.status, "no_symptom_selected");
}

// =============================================================================
// Chat
// =============================================================================

#[tokio::test]
async fn test_chat_detects_symptom_and_starts_session() {
    let resp = create_router(make_state())
        .oneshot(post_json(
            "/api/chat",
            r#"{"message": "I have a bad cough today"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ChatReplyResponse = body_json(resp).await;
    assert_eq!(body.detected_symptom.as_deref(), Some("cough"));
    assert_eq!(body.matched.unwrap().disease, "Flu");
    for needle in ["Flu", "Paracetamol", "Rest, hydrate", "General Physician"] {
        assert!(body.reply.contains(needle));
    }
    assert!(body.reply.ends_with(DISCLAIMER));
}

#[tokio::test]
async fn test_chat_fallback_reply() {
    let resp = create_router(make_state())
        .oneshot(post_json("/api/chat", r#"{"message": "I feel great"}"#))
        .await
        .unwrap();
    let body: ChatReplyResponse = body_json(resp).await;
    assert_eq!(body.reply, FALLBACK_REPLY);
    assert!(body.detected_symptom.is_none());
    assert!(body.matched.is_none());
}

#[tokio::test]
async fn test_chat_session_transcript_accumulates() {
    let state = make_state();
    let app = create_router(state.clone());

    let resp = app
        .clone()
        .oneshot(post_json("/api/chat", r#"{"message": "fever"}"#))
        .await
        .unwrap();
    let first: ChatReplyResponse = body_json(resp).await;

    let json = format!(
        r#"{{"session_id": "{}", "message": "hello there"}}"#,
        first.session_id
    );
    let resp = app.clone().oneshot(post_json("/api/chat", &json)).await.unwrap();
    let second: ChatReplyResponse = body_json(resp).await;
    assert_eq!(second.session_id, first.session_id);
    assert_eq!(state.sessions.len(), 1);

    let uri = format!("/api/chat/{}/messages", first.session_id);
    let resp = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let history: ChatMessagesResponse = body_json(resp).await;
    let roles: Vec<Role> = history.messages.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![Role::User, Role::Assistant, Role::User, Role::Assistant]
    );
    assert_eq!(history.messages[0].content, "fever");
    assert_eq!(history.messages[1].content, first.reply);
    assert_eq!(history.messages[3].content, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_chat_empty_message_is_bad_request() {
    let state = make_state();
    let resp = create_router(state.clone())
        .oneshot(post_json("/api/chat", r#"{"message": "   "}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: ErrorBody = body_json(resp).await;
    assert_eq!(err.error, "bad_request");
    assert_eq!(err.message, "message cannot be empty");
    assert!(state.sessions.is_empty());
}

#[tokio::test]
async fn test_chat_message_too_long_is_bad_request() {
    let long = "a".repeat(2001);
    let json = format!(r#"{{"message": "{}"}}"#, long);
    let resp = create_router(make_state())
        .oneshot(post_json("/api/chat", &json))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_unknown_session_is_not_found() {
    let json = format!(
        r#"{{"session_id": "{}", "message": "fever"}}"#,
        Uuid::new_v4()
    );
    let resp = create_router(make_state())
        .oneshot(post_json("/api/chat", &json))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err: ErrorBody = body_json(resp).await;
    assert_eq!(err.error, "not_found");
}

#[tokio::test]
async fn test_chat_messages_unknown_session() {
    let uri = format!("/api/chat/{}/messages", Uuid::new_v4());
    let resp = create_router(make_state()).oneshot(get(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_end_chat_session() {
    let state = make_state();
    let app = create_router(state.clone());
    let resp = app
        .clone()
        .oneshot(post_json("/api/chat", r#"{"message": "cough"}"#))
        .await
        .unwrap();
    let reply: ChatReplyResponse = body_json(resp).await;

    let uri = format!("/api/chat/{}", reply.session_id);
    let delete = Request::delete(&uri).body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(delete).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(state.sessions.is_empty());

    let delete = Request::delete(&uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(delete).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

fn make_state_without_idle_sessions() -> AppState {
    let mut config = MedimindConfig::default();
    config.chat.reveal_delay_ms = 0;
    config.chat.session_ttl_secs = 0;
    AppState::new(config, Arc::new(flu_dataset()), &Stylesheet::from_css(""))
}

#[tokio::test]
async fn test_abandoned_sessions_do_not_accumulate() {
    let state = make_state_without_idle_sessions();
    let app = create_router(state.clone());
    for _ in 0..50 {
        let resp = app
            .clone()
            .oneshot(post_json("/api/chat", r#"{"message": "fever"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
    assert!(state.sessions.is_empty());
}

#[tokio::test]
async fn test_idle_session_is_not_found() {
    let app = create_router(make_state_without_idle_sessions());
    let resp = app
        .clone()
        .oneshot(post_json("/api/chat", r#"{"message": "fever"}"#))
        .await
        .unwrap();
    let reply: ChatReplyResponse = body_json(resp).await;

    let json = format!(
        r#"{{"session_id": "{}", "message": "cough"}}"#,
        reply.session_id
    );
    let resp = app.oneshot(post_json("/api/chat", &json)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_chat_stream_reveals_frames_then_done() {
    let state = make_state();
    let resp = create_router(state.clone())
        .oneshot(post_json("/api/chat/stream", r#"{"message": "I feel great"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/event-stream"));

    let body = String::from_utf8(body_bytes(resp).await).unwrap();
    let events = parse_sse(&body);
    let (last_name, session) = events.last().unwrap();
    assert_eq!(last_name, "done");
    let session_id: Uuid = session.parse().unwrap();

    let frames: Vec<&String> = events
        .iter()
        .filter(|(name, _)| name == "frame")
        .map(|(_, data)| data)
        .collect();
    assert_eq!(frames.len(), FALLBACK_REPLY.split_whitespace().count() + 1);
    assert!(frames[0].ends_with('▌'));
    assert_eq!(frames.last().unwrap().as_str(), FALLBACK_REPLY);

    let messages = state.sessions.messages(session_id).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].content, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_chat_stream_rejects_empty_message() {
    let resp = create_router(make_state())
        .oneshot(post_json("/api/chat/stream", r#"{"message": ""}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
