use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;
use service::storage::game_state::GameStateStore;

use crate::errors::ApiError;

#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<GameStateStore>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// GET /api/load — the stored document, verbatim.
async fn load_state(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let document = state.store.load().await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], document).into_response())
}

/// POST /api/save — full-document replace.
///
/// The body is parsed only to reject malformed JSON; what reaches the
/// store is the raw text, so field order and unknown fields survive.
/// Any well-formed JSON value is accepted, objects or not.
async fn save_state(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    if let Err(e) = serde_json::from_slice::<serde_json::Value>(&body) {
        return Err(ApiError::Client(format!("invalid JSON body: {e}")));
    }
    let document = String::from_utf8(body.to_vec())
        .map_err(|e| ApiError::Client(format!("body is not valid UTF-8: {e}")))?;
    state.store.save(document).await?;
    Ok(Json(serde_json::json!({"status": "success"})))
}

/// Build the full application router: static game shell plus the state API
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let static_dir = ServeDir::new("frontend").fallback(ServeFile::new("frontend/index.html"));

    // Public routes (static + health)
    let public = Router::new()
        .route("/health", get(health))
        .fallback_service(static_dir);

    // State API routes
    let api = Router::new()
        .route("/api/load", get(load_state))
        .route("/api/save", post(save_state));

    // Compose
    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
