use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde_json::json;

use crate::cors::CORS_HEADERS;

/// Error code carried by every failure envelope, whatever the cause.
pub const ERROR_CODE: &str = "CONTACT_FORM_FAILED";

#[derive(Debug)]
pub enum IntakeError {
    BadRequest(String),
    Validation(String),
    Config(String),
    Upstream(String),
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::BadRequest(msg)
            | IntakeError::Validation(msg)
            | IntakeError::Config(msg)
            | IntakeError::Upstream(msg) => write!(f, "{msg}"),
        }
    }
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        match &self {
            IntakeError::Config(msg) => tracing::error!("Configuration error: {msg}"),
            IntakeError::Upstream(msg) => tracing::error!("Upstream write failed: {msg}"),
            IntakeError::BadRequest(msg) | IntakeError::Validation(msg) => {
                tracing::debug!("Rejected submission: {msg}")
            }
        }

        // One envelope shape for every failure so clients always get a
        // parseable structure.
        let body = json!({
            "error": {
                "code": ERROR_CODE,
                "message": self.to_string(),
                "timestamp": Utc::now(),
            }
        });

        (StatusCode::INTERNAL_SERVER_ERROR, CORS_HEADERS, axum::Json(body)).into_response()
    }
}
