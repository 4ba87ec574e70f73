use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Failures surfaced by the HTTP handlers.
///
/// Only two things can go wrong: the targeted row does not exist, or the
/// store refused the statement (connectivity, constraint violation,
/// malformed query). The store cause is logged server-side and never leaked
/// to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("todo not found")]
    NotFound,

    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "message": "Todo not found" })),
            )
                .into_response(),
            ApiError::Store(e) => {
                tracing::error!(error = %e, "store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "Server error" })),
                )
                    .into_response()
            }
        }
    }
}
