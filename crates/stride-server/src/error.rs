//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use stride_core::ScoringError;

/// Server error type
#[derive(Debug)]
pub enum ServerError {
    /// Invalid request input (unknown event, out-of-range points, ...)
    InvalidInput(String),

    /// Batch request missing required fields; echoes what was received
    MissingFields { received: serde_json::Value },

    /// Internal server error
    InternalError(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ServerError::MissingFields { .. } => write!(f, "Missing required fields"),
            ServerError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::MissingFields { received } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Missing required fields",
                    "received": received,
                })),
            )
                .into_response(),
            ServerError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            ServerError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": msg })),
            )
                .into_response(),
        }
    }
}

impl From<ScoringError> for ServerError {
    fn from(err: ScoringError) -> Self {
        ServerError::InvalidInput(err.to_string())
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}
