pub mod contact;

use axum::routing::{options, post};
use axum::Router;

use crate::state::SharedState;

pub fn intake_routes() -> Router<SharedState> {
    Router::new()
        .route("/v1/contact", post(contact::submit))
        .route("/v1/contact", options(contact::preflight))
}
