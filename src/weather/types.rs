//! Response types and temperature conversions.

use serde::{Deserialize, Serialize};

/// Composed lookup result returned by `POST /weather`.
///
/// Fahrenheit and Kelvin are always derived from Celsius; construct through
/// [`WeatherReport::from_celsius`] so they cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Resolved city name.
    pub city: String,
    /// Temperature in Celsius as reported by the provider.
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    /// Derived Fahrenheit temperature.
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    /// Derived Kelvin temperature.
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl WeatherReport {
    /// Build a report from a city and its Celsius temperature.
    pub fn from_celsius(city: impl Into<String>, temp_c: f64) -> Self {
        Self {
            city: city.into(),
            temp_c,
            temp_f: celsius_to_fahrenheit(temp_c),
            temp_k: celsius_to_kelvin(temp_c),
        }
    }
}

/// Convert °C to °F.
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 1.8 + 32.0
}

/// Convert °C to K. The 273 offset is the existing wire contract, kept as-is.
pub fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.0
}
