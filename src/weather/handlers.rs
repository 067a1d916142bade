//! HTTP handlers for the weather orchestration service.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info, instrument};

use crate::cep::{is_valid_cep, CepRequest};
use crate::config::WeatherConfig;
use crate::error::DirectoryError;
use crate::metrics;

use super::climate::ClimateClient;
use super::directory::DirectoryClient;
use super::types::WeatherReport;

/// Application state shared with the weather handlers.
#[derive(Debug, Clone)]
pub struct WeatherState {
    /// CEP → city resolver.
    pub directory: DirectoryClient,
    /// City → temperature resolver.
    pub climate: ClimateClient,
}

impl WeatherState {
    /// Build the resolvers from config, sharing one HTTP client.
    pub fn new(config: &WeatherConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self {
            directory: DirectoryClient::with_base_url(http.clone(), config.viacep_base_url.clone()),
            climate: ClimateClient::with_base_url(
                http,
                config.weather_api_url.clone(),
                config.weather_api_key.clone(),
            ),
        }
    }
}

/// `POST /weather` handler: CEP in, composed temperature report out.
///
/// Short-circuits on the first failure; error bodies are plain text with
/// the contract status codes (400 decode, 422 format, 404 unknown CEP,
/// 500 everything else).
#[instrument(skip(state, body))]
pub async fn weather_by_cep(State(state): State<WeatherState>, body: String) -> Response {
    metrics::increment_weather_requests();

    let request: CepRequest = match serde_json::from_str(&body) {
        Ok(req) => req,
        Err(_) => {
            metrics::increment_lookup_failures("bad_request");
            return (StatusCode::BAD_REQUEST, "invalid request body").into_response();
        }
    };

    if !is_valid_cep(&request.cep) {
        metrics::increment_lookup_failures("invalid_cep");
        return (StatusCode::UNPROCESSABLE_ENTITY, "invalid zipcode").into_response();
    }

    let city = match state.directory.city_by_cep(&request.cep).await {
        Ok(city) => city,
        Err(DirectoryError::InvalidCep { .. }) => {
            metrics::increment_lookup_failures("invalid_cep");
            return (StatusCode::UNPROCESSABLE_ENTITY, "invalid zipcode").into_response();
        }
        Err(DirectoryError::NotFound { .. }) => {
            metrics::increment_lookup_failures("not_found");
            return (StatusCode::NOT_FOUND, "can not find zipcode").into_response();
        }
        Err(err) => {
            error!(cep = %request.cep, error = %err, "directory lookup failed");
            metrics::increment_lookup_failures("directory");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("internal error: {err}"),
            )
                .into_response();
        }
    };

    let temp_c = match state.climate.temperature_by_city(&city).await {
        Ok(temp) => temp,
        Err(err) => {
            error!(city = %city, error = %err, "climate lookup failed");
            metrics::increment_lookup_failures("climate");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("error fetching weather: {err}"),
            )
                .into_response();
        }
    };

    let report = WeatherReport::from_celsius(city, temp_c);
    info!(city = %report.city, temp_c = report.temp_c, "responding with weather report");

    (StatusCode::OK, Json(report)).into_response()
}

/// Liveness handler, always 200 "ok".
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
