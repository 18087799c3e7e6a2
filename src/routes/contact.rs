use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::cors::CORS_HEADERS;
use crate::inquiry::pipeline;
use crate::state::SharedState;

/// `POST /v1/contact` — validate and persist one inquiry.
pub async fn submit(State(state): State<SharedState>, body: Bytes) -> Response {
    match pipeline::run(&state, &body).await {
        Ok(receipt) => (
            CORS_HEADERS,
            Json(json!({
                "data": {
                    "success": true,
                    "message": receipt.message,
                    "inquiryId": receipt.inquiry_id,
                    "timestamp": Utc::now(),
                }
            })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// `OPTIONS /v1/contact` — CORS pre-flight; no body processing.
pub async fn preflight() -> Response {
    (StatusCode::OK, CORS_HEADERS).into_response()
}
