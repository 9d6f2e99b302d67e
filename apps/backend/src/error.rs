//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use memo_core::QuizError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Repository sync failed: {0}")]
    Sync(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Quiz(QuizError::EmptyTable) => (StatusCode::BAD_REQUEST, "quiz_error"),
            ApiError::Quiz(QuizError::NoActiveItem) => (StatusCode::CONFLICT, "quiz_error"),
            ApiError::Sync(_) => (StatusCode::BAD_GATEWAY, "sync_error"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error"),
            ApiError::Settings(_) => (StatusCode::INTERNAL_SERVER_ERROR, "settings_error"),
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
