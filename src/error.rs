//! Unified error types for the CEP weather services.

use thiserror::Error;

/// Unified error type for the CEP weather services.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Directory (CEP → city) lookup error.
    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// Climate (city → temperature) lookup error.
    #[error("climate error: {0}")]
    Climate(#[from] ClimateError),

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// CEP → city resolution errors.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The CEP does not match the 8-digit format.
    #[error("invalid cep format: {cep}")]
    InvalidCep {
        /// The rejected input.
        cep: String,
    },

    /// The directory provider does not know this CEP, or returned no city.
    #[error("cep not found: {cep}")]
    NotFound {
        /// The unresolvable CEP.
        cep: String,
    },

    /// Transport failure talking to the directory provider.
    #[error("directory request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider body could not be decoded.
    #[error("failed to decode directory response: {0}")]
    Json(#[from] serde_json::Error),
}

/// City → temperature resolution errors.
#[derive(Error, Debug)]
pub enum ClimateError {
    /// No WeatherAPI key configured; no request was attempted.
    #[error("weather api key not configured")]
    MissingApiKey,

    /// The weather provider answered with a non-success status.
    #[error("weather provider error status {status}: {body}")]
    Upstream {
        /// HTTP status returned by the provider.
        status: u16,
        /// Raw provider body, kept for diagnostics.
        body: String,
    },

    /// Transport or decoding failure talking to the weather provider.
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
