//! Two-hop CEP to weather HTTP orchestration.
//!
//! Two small services compose a postal-code lookup:
//!
//! ```text
//! client ── POST /cep ──> front service ── POST /weather ──> weather service
//!                                                 │
//!                                    ViaCEP (cep → city)
//!                                                 │
//!                                    WeatherAPI (city → temp_c)
//! ```
//!
//! The front service validates the 8-digit CEP and relays the downstream
//! response verbatim. The weather service resolves the CEP to a city, the
//! city to a Celsius temperature, derives Fahrenheit and Kelvin, and answers
//! `{"city", "temp_C", "temp_F", "temp_K"}`.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`cep`]: Postal-code validation and the shared request type
//! - [`weather`]: Directory and climate resolvers plus the orchestration handler
//! - [`front`]: Forwarding front service
//! - [`metrics`]: Lookup counters and latency histograms
//! - [`utils`]: Utility functions

pub mod cep;
pub mod config;
pub mod error;
pub mod front;
pub mod metrics;
pub mod utils;
pub mod weather;

pub use config::{FrontConfig, WeatherConfig};
pub use error::{Result, ServiceError};
