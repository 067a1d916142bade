//! Climate resolver: city → current temperature via WeatherAPI.

use std::time::Instant;

use serde::Deserialize;
use tracing::{debug, instrument, Span};

use crate::config::WeatherConfig;
use crate::error::ClimateError;
use crate::metrics;

/// WeatherAPI `current.json` client.
#[derive(Debug, Clone)]
pub struct ClimateClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL of the weather provider.
    base_url: String,
    /// API key; `None` or empty fails every lookup without a network call.
    api_key: Option<String>,
}

/// The slice of the provider response we decode. Everything else is ignored.
#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp_c: f64,
}

impl ClimateClient {
    /// Create a new WeatherAPI client from config.
    pub fn new(config: &WeatherConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.weather_api_url.clone(),
            api_key: config.weather_api_key.clone(),
        }
    }

    /// Create a client with explicit base URL and key, reusing an HTTP client.
    pub fn with_base_url(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Get the provider base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current Celsius temperature for a city.
    ///
    /// The city goes out URL-encoded as the `q` query parameter. A missing
    /// key is reported before any request is made.
    #[instrument(skip(self), fields(city = %city, temp_c = tracing::field::Empty))]
    pub async fn temperature_by_city(&self, city: &str) -> Result<f64, ClimateError> {
        let key = match self.api_key.as_deref().filter(|k| !k.is_empty()) {
            Some(key) => key,
            None => return Err(ClimateError::MissingApiKey),
        };

        let start = Instant::now();
        let url = format!("{}/v1/current.json", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("key", key), ("q", city)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClimateError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: CurrentResponse = response.json().await?;
        metrics::record_climate_latency(start);

        Span::current().record("temp_c", decoded.current.temp_c);
        debug!(city = %city, temp_c = decoded.current.temp_c, "resolved city to temperature");
        metrics::increment_climate_lookups();

        Ok(decoded.current.temp_c)
    }
}
