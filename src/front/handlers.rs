//! HTTP handlers for the front service.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, instrument};

use crate::cep::{is_valid_cep, CepRequest};
use crate::config::FrontConfig;
use crate::metrics;

/// Application state shared with the front handlers.
#[derive(Debug, Clone)]
pub struct FrontState {
    /// Outbound HTTP client, bounded by the configured timeout.
    http: reqwest::Client,
    /// Weather service lookup endpoint.
    weather_url: String,
}

impl FrontState {
    /// Build the state from config.
    pub fn new(config: &FrontConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            weather_url: config.service_b_url.clone(),
        }
    }

    /// Build the state around an explicit downstream URL (tests).
    pub fn with_weather_url(http: reqwest::Client, weather_url: impl Into<String>) -> Self {
        Self {
            http,
            weather_url: weather_url.into(),
        }
    }

    /// The downstream endpoint this front forwards to.
    pub fn weather_url(&self) -> &str {
        &self.weather_url
    }
}

/// `POST /cep` handler: validate, forward, relay.
///
/// Anything the front cannot validate locally is a 422 "invalid zipcode";
/// a downstream transport failure is a local 500. A downstream *response*,
/// whatever its status, is copied back verbatim.
#[instrument(skip(state, body))]
pub async fn forward_cep(State(state): State<FrontState>, body: String) -> Response {
    metrics::increment_cep_requests();

    let request: CepRequest = match serde_json::from_str(&body) {
        Ok(req) => req,
        Err(_) => {
            metrics::increment_lookup_failures("invalid_cep");
            return (StatusCode::UNPROCESSABLE_ENTITY, "invalid zipcode").into_response();
        }
    };

    if !is_valid_cep(&request.cep) {
        metrics::increment_lookup_failures("invalid_cep");
        return (StatusCode::UNPROCESSABLE_ENTITY, "invalid zipcode").into_response();
    }

    let downstream = state
        .http
        .post(&state.weather_url)
        .json(&request)
        .send()
        .await;

    let response = match downstream {
        Ok(response) => response,
        Err(err) => {
            error!(url = %state.weather_url, error = %err, "forwarding to weather service failed");
            metrics::increment_lookup_failures("forward");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("error forwarding request: {err}"),
            )
                .into_response();
        }
    };

    let status = response.status();
    let body = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(url = %state.weather_url, error = %err, "reading weather service response failed");
            metrics::increment_lookup_failures("forward");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("error forwarding request: {err}"),
            )
                .into_response();
        }
    };

    // Verbatim relay, no reinterpretation of the downstream answer.
    (status, body).into_response()
}

/// Liveness handler, always 200 "ok".
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
