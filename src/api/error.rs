//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::interaction::types::GENERIC_FAILURE_MESSAGE;
use crate::interaction::AnalysisError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing selection")]
    MissingSelection,
    #[error("Identical selection")]
    IdenticalSelection,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::MissingSelection => (
                StatusCode::BAD_REQUEST,
                "MISSING_SELECTION",
                AnalysisError::MissingSelection.user_message().to_string(),
            ),
            ApiError::IdenticalSelection => (
                StatusCode::BAD_REQUEST,
                "IDENTICAL_SELECTION",
                AnalysisError::IdenticalSelection(String::new())
                    .user_message()
                    .to_string(),
            ),
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail.clone()),
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::AnalysisFailed(detail) => {
                tracing::warn!(detail, "Analysis failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "ANALYSIS_FAILED",
                    GENERIC_FAILURE_MESSAGE.to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    GENERIC_FAILURE_MESSAGE.to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::MissingSelection => ApiError::MissingSelection,
            AnalysisError::IdenticalSelection(_) => ApiError::IdenticalSelection,
            AnalysisError::Cancelled => ApiError::AnalysisFailed(err.to_string()),
        }
    }
}
