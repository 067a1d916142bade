//! Route definitions for the weather orchestration service.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{health, weather_by_cep, WeatherState};

/// Create the weather service router.
pub fn create_router(state: WeatherState) -> Router {
    Router::new()
        .route("/weather", post(weather_by_cep))
        .route("/healthz", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
