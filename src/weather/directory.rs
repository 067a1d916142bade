//! Directory resolver: CEP → city via the ViaCEP lookup API.

use std::time::Instant;

use serde::Deserialize;
use tracing::{debug, instrument, Span};

use crate::cep::is_valid_cep;
use crate::config::WeatherConfig;
use crate::error::DirectoryError;
use crate::metrics;

/// ViaCEP API client.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL of the ViaCEP provider.
    base_url: String,
}

/// Subset of the ViaCEP response we care about.
///
/// Every field is optional on the wire: the provider answers `{"erro": true}`
/// for unknown codes and has shipped the city under `localidade` or `cidade`
/// over time.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryResponse {
    /// Present (any value) when the provider does not know the CEP.
    #[serde(default)]
    pub erro: Option<serde_json::Value>,
    /// Primary city field.
    #[serde(default)]
    pub localidade: Option<String>,
    /// Legacy fallback city field.
    #[serde(default)]
    pub cidade: Option<String>,
}

impl DirectoryResponse {
    /// Extract the resolved city, honoring the localidade → cidade fallback.
    /// `None` means the response carries no usable city.
    pub fn city(&self) -> Option<&str> {
        if self.erro.is_some() {
            return None;
        }
        self.localidade
            .as_deref()
            .filter(|c| !c.is_empty())
            .or_else(|| self.cidade.as_deref().filter(|c| !c.is_empty()))
    }
}

impl DirectoryClient {
    /// Create a new ViaCEP client from config.
    pub fn new(config: &WeatherConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.viacep_base_url.clone(),
        }
    }

    /// Create a client with an explicit base URL, reusing an existing HTTP client.
    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Get the provider base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a CEP to its city name.
    ///
    /// Re-checks the 8-digit format before touching the network, even though
    /// handlers validate first.
    #[instrument(skip(self), fields(cep = %cep, city = tracing::field::Empty))]
    pub async fn city_by_cep(&self, cep: &str) -> Result<String, DirectoryError> {
        if !is_valid_cep(cep) {
            return Err(DirectoryError::InvalidCep {
                cep: cep.to_string(),
            });
        }

        let start = Instant::now();
        let url = format!("{}/ws/{}/json/", self.base_url, cep);

        let response = self.http.get(&url).send().await?;
        let bytes = response.bytes().await?;
        let body: DirectoryResponse = serde_json::from_slice(&bytes)?;
        metrics::record_directory_latency(start);

        let city = body.city().ok_or_else(|| DirectoryError::NotFound {
            cep: cep.to_string(),
        })?;

        Span::current().record("city", city);
        debug!(cep = %cep, city = %city, "resolved cep to city");
        metrics::increment_directory_lookups();

        Ok(city.to_string())
    }
}
