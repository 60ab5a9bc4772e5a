//! API error types with HTTP response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::DomainError;
use order_store::OrderStoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned in every 500 body. Internal detail is only logged.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Structured error body: `{ "message": ..., "status": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status: status.as_u16(),
        }
    }
}

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found. Rendered as a structured 404 body.
    NotFound(String),
    /// Bad request from the client. Rendered as a plain-text 400.
    BadRequest(String),
    /// Body sent without a JSON content type. Rendered as a plain-text 415.
    UnsupportedMediaType(String),
    /// Internal server error. The detail is logged, never returned.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "not found");
                let body = ErrorResponse::new(msg, StatusCode::NOT_FOUND);
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "bad request");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::UnsupportedMediaType(msg) => {
                tracing::warn!(error = %msg, "unsupported media type");
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                let body = ErrorResponse::new(
                    UNEXPECTED_ERROR_MESSAGE,
                    StatusCode::INTERNAL_SERVER_ERROR,
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput(msg) => ApiError::BadRequest(msg),
            err if err.is_not_found() => ApiError::NotFound(err.to_string()),
            err => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::UnsupportedMediaType(rejection.body_text())
            }
            _ => ApiError::BadRequest(rejection.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Errors that stop the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to install Prometheus recorder: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("order store setup failed: {0}")]
    Store(#[from] OrderStoreError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
