use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// User-facing message for every failure of the submission taxonomy.
pub const SUBMISSION_FAILED: &str = "Failed to process submission";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Generation backend unavailable: {0}")]
    UpstreamUnavailable(#[source] LlmError),

    #[error("Generation backend returned no content")]
    EmptyGeneration,

    #[error("Generated output is not valid JSON: {0}")]
    MalformedOutput(String),

    #[error("Generated output does not match schema at `{field}`: {reason}")]
    SchemaMismatch { field: String, reason: String },

    #[error("Storage failure: {0}")]
    StorageFailure(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::EmptyContent => AppError::EmptyGeneration,
            other => AppError::UpstreamUnavailable(other),
        }
    }
}

impl AppError {
    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated => "UNAUTHENTICATED",
            AppError::ProfileNotFound => "PROFILE_NOT_FOUND",
            AppError::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            AppError::EmptyGeneration => "EMPTY_GENERATION",
            AppError::MalformedOutput(_) => "MALFORMED_OUTPUT",
            AppError::SchemaMismatch { .. } => "SCHEMA_MISMATCH",
            AppError::StorageFailure(_) => "STORAGE_FAILURE",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::ProfileNotFound => StatusCode::NOT_FOUND,
            AppError::UpstreamUnavailable(_)
            | AppError::EmptyGeneration
            | AppError::MalformedOutput(_)
            | AppError::SchemaMismatch { .. } => StatusCode::BAD_GATEWAY,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::StorageFailure(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = match &self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Unauthenticated | AppError::ProfileNotFound => {
                tracing::warn!("Rejected request: {self}");
                SUBMISSION_FAILED.to_string()
            }
            AppError::UpstreamUnavailable(e) => {
                tracing::error!("Upstream generation error: {e:?}");
                SUBMISSION_FAILED.to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                SUBMISSION_FAILED.to_string()
            }
            _ => {
                tracing::error!("{self}");
                SUBMISSION_FAILED.to_string()
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
