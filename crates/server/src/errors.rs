use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request body; rejected before the store is touched.
    #[error("{0}")]
    Client(String),
    /// The backing row could not be read or written.
    #[error(transparent)]
    Storage(#[from] ServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::Client(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Storage(e) => {
                let msg = e.to_string();
                error!(error = %msg, "state store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(serde_json::json!({"status": "error", "message": msg}))).into_response()
    }
}
