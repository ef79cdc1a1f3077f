//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::analysis::AnalysisError;
use crate::flow::FlowError;
use crate::validation::FieldError;

/// Structured error response body for browser clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid submission")]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    Analysis(#[from] AnalysisError),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Illegal flow transition: {0}")]
    IllegalTransition(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut fields = None;
        let (status, code, message) = match self {
            ApiError::Validation(errors) => {
                let message = errors
                    .first()
                    .map(|e| e.message.clone())
                    .unwrap_or_else(|| "Invalid submission".to_string());
                fields = Some(errors);
                (StatusCode::BAD_REQUEST, "VALIDATION", message)
            }
            ApiError::Analysis(err) => {
                let message = err.user_message();
                match err {
                    AnalysisError::MissingInput => {
                        (StatusCode::BAD_REQUEST, "MISSING_INPUT", message)
                    }
                    AnalysisError::Connection(_) => {
                        (StatusCode::SERVICE_UNAVAILABLE, "MODEL_UNAVAILABLE", message)
                    }
                    AnalysisError::InvalidResponse
                    | AnalysisError::MalformedResponse(_)
                    | AnalysisError::JsonParsing(_) => {
                        (StatusCode::BAD_GATEWAY, "INVALID_MODEL_RESPONSE", message)
                    }
                    AnalysisError::Upstream { .. }
                    | AnalysisError::HttpClient(_)
                    | AnalysisError::Capability(_) => {
                        (StatusCode::BAD_GATEWAY, "ANALYSIS_FAILED", message)
                    }
                }
            }
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail),
            ApiError::IllegalTransition(detail) => {
                (StatusCode::CONFLICT, "ILLEGAL_TRANSITION", detail)
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code,
                message,
                fields,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<FlowError> for ApiError {
    fn from(err: FlowError) -> Self {
        ApiError::IllegalTransition(err.to_string())
    }
}
