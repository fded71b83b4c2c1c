use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use triage_examination::ExaminationError;
use triage_patterns::error::PatternError;
use triage_questions::EngineError;
use triage_storage::error::StorageError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// The request does not fit the session's current position.
    Conflict(String),
    /// A stored document exists but cannot be used.
    Unprocessable(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            StorageError::InvalidDocument { .. } => ApiError::Unprocessable(e.to_string()),
            StorageError::Io { .. } => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::InvalidRuleDocument(_) => ApiError::Unprocessable(e.to_string()),
            EngineError::UnknownQuestion(_) => ApiError::BadRequest(e.to_string()),
            EngineError::QuestionAlreadyAnswered(_) => ApiError::Conflict(e.to_string()),
        }
    }
}

impl From<ExaminationError> for ApiError {
    fn from(e: ExaminationError) -> Self {
        ApiError::Conflict(e.to_string())
    }
}

impl From<PatternError> for ApiError {
    fn from(e: PatternError) -> Self {
        match e {
            PatternError::UnknownPattern(_) => ApiError::NotFound(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
