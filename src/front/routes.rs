//! Route definitions for the front service.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{forward_cep, health, FrontState};

/// Create the front service router.
pub fn create_router(state: FrontState) -> Router {
    Router::new()
        .route("/cep", post(forward_cep))
        .route("/healthz", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
