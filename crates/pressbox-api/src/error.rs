use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application error type that converts to HTTP responses.
///
/// Detail strings are logged server-side only; responses carry generic
/// messages so internal schema and identifiers never reach the caller.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
    Database(sqlx::Error),
    Upstream(String),
}

impl AppError {
    pub fn upstream(e: impl std::fmt::Display) -> Self {
        AppError::Upstream(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(detail) => {
                tracing::warn!(detail = %detail, "Rejected invalid request");
                (StatusCode::BAD_REQUEST, "Invalid request")
            }
            AppError::NotFound(detail) => {
                tracing::info!(detail = %detail, "Blog not found");
                (StatusCode::NOT_FOUND, "Blog not found")
            }
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "An error has occurred")
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "An error has occurred")
            }
            AppError::Upstream(detail) => {
                tracing::error!(error = %detail, "Upstream error");
                (StatusCode::INTERNAL_SERVER_ERROR, "An error has occurred")
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Database(e)
    }
}
