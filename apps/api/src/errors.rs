use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::GenerateError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required input: {0}")]
    MissingInput(String),

    #[error("Invalid value for '{field}': {value}")]
    InvalidInput { field: String, value: String },

    #[error("Failed to extract text from document: {0}")]
    Extraction(String),

    #[error("Invalid response format from AI: {0}")]
    MalformedGeneration(String),

    #[error("Invalid questions format: expected non-empty array")]
    EmptyResult,

    #[error("Generation request failed: {0}")]
    Upstream(#[from] GenerateError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Shorthand for a `MissingInput` naming the absent field.
    pub fn missing(field: &str) -> Self {
        AppError::MissingInput(field.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MissingInput(_) | AppError::InvalidInput { .. } => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            AppError::Extraction(msg) => {
                tracing::error!("Extraction error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": self.to_string() }),
                )
            }
            AppError::MalformedGeneration(raw) => {
                tracing::error!("Invalid response format: {raw}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Invalid response format from AI" }),
                )
            }
            AppError::EmptyResult => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
            AppError::Upstream(e) => {
                tracing::error!("Generation service error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to generate content", "details": e.to_string() }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal server error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
