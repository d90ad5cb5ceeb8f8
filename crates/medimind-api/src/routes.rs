//! Router setup with all routes and middleware.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use medimind_core::MedimindError;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS: only the page served by this host, on either loopback name.
    let port = state.config.server.port;
    let origins: Vec<HeaderValue> = [
        format!("http://127.0.0.1:{}", port),
        format!("http://localhost:{}", port),
    ]
    .iter()
    .filter_map(|origin| origin.parse().ok())
    .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::ui))
        .route("/ui", get(handlers::ui))
        .route("/api/symptoms", get(handlers::symptoms))
        .route("/api/search", get(handlers::search))
        .route("/api/chat", post(handlers::chat))
        .route("/api/chat/stream", post(handlers::chat_stream))
        .route("/api/chat/{id}/messages", get(handlers::chat_messages))
        .route("/api/chat/{id}", delete(handlers::end_chat))
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server on 127.0.0.1 at the configured port.
pub async fn start_server(state: AppState) -> Result<(), MedimindError> {
    let addr = format!("127.0.0.1:{}", state.config.server.port);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "HTTP server listening");
    tracing::info!("Page at http://{}/", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
