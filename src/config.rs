//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Front service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct FrontConfig {
    /// Weather service lookup endpoint the front forwards to.
    #[serde(default = "default_service_b_url")]
    pub service_b_url: String,

    /// HTTP server port.
    #[serde(default = "default_front_port")]
    pub port: u16,

    /// Outbound call timeout in seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

/// Weather orchestration service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// Base URL of the ViaCEP directory provider.
    #[serde(default = "default_viacep_base_url")]
    pub viacep_base_url: String,

    /// Base URL of the WeatherAPI provider.
    #[serde(default = "default_weather_api_url")]
    pub weather_api_url: String,

    /// WeatherAPI key. Absence is surfaced per request, not at startup.
    #[serde(default)]
    pub weather_api_key: Option<String>,

    /// HTTP server port.
    #[serde(default = "default_weather_port")]
    pub port: u16,

    /// Outbound call timeout in seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_service_b_url() -> String {
    "http://servico-b:8081/weather".to_string()
}

fn default_front_port() -> u16 {
    8080
}

fn default_weather_port() -> u16 {
    8081
}

fn default_viacep_base_url() -> String {
    "https://viacep.com.br".to_string()
}

fn default_weather_api_url() -> String {
    "http://api.weatherapi.com".to_string()
}

fn default_http_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl FrontConfig {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.service_b_url.is_empty() {
            return Err("SERVICE_B_URL must not be empty".to_string());
        }
        if !self.service_b_url.starts_with("http://") && !self.service_b_url.starts_with("https://")
        {
            return Err("SERVICE_B_URL must be an http(s) URL".to_string());
        }
        if self.http_timeout_secs == 0 {
            return Err("HTTP_TIMEOUT_SECS must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl WeatherConfig {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.viacep_base_url.is_empty() {
            return Err("VIACEP_BASE_URL must not be empty".to_string());
        }
        if self.weather_api_url.is_empty() {
            return Err("WEATHER_API_URL must not be empty".to_string());
        }
        if self.http_timeout_secs == 0 {
            return Err("HTTP_TIMEOUT_SECS must be greater than zero".to_string());
        }
        Ok(())
    }

    /// Whether a WeatherAPI key is configured and non-empty.
    pub fn has_api_key(&self) -> bool {
        self.weather_api_key
            .as_deref()
            .map(|k| !k.is_empty())
            .unwrap_or(false)
    }
}
