//! Lookup counters and latency histograms.
//!
//! This module tracks:
//! - Inbound request counts per service
//! - Directory and climate lookup counts
//! - Lookup failures by reason
//! - Per-hop external call latency

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Front service inbound request counter metric name.
pub const METRIC_CEP_REQUESTS: &str = "cep_requests_total";
/// Weather service inbound request counter metric name.
pub const METRIC_WEATHER_REQUESTS: &str = "weather_requests_total";
/// Directory (CEP → city) lookup counter metric name.
pub const METRIC_DIRECTORY_LOOKUPS: &str = "directory_lookups_total";
/// Climate (city → temperature) lookup counter metric name.
pub const METRIC_CLIMATE_LOOKUPS: &str = "climate_lookups_total";
/// Lookup failure counter metric name (labeled by reason).
pub const METRIC_LOOKUP_FAILURES: &str = "lookup_failures_total";
/// Directory lookup latency metric name.
pub const METRIC_DIRECTORY_LATENCY: &str = "directory_lookup_latency_ms";
/// Climate lookup latency metric name.
pub const METRIC_CLIMATE_LATENCY: &str = "climate_lookup_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(METRIC_CEP_REQUESTS, "Total lookups received by the front service");
    describe_counter!(
        METRIC_WEATHER_REQUESTS,
        "Total lookups received by the weather service"
    );
    describe_counter!(
        METRIC_DIRECTORY_LOOKUPS,
        "Total successful CEP to city resolutions"
    );
    describe_counter!(
        METRIC_CLIMATE_LOOKUPS,
        "Total successful city to temperature resolutions"
    );
    describe_counter!(
        METRIC_LOOKUP_FAILURES,
        "Total failed lookups, labeled by reason"
    );

    describe_histogram!(
        METRIC_DIRECTORY_LATENCY,
        "Directory provider call latency in milliseconds"
    );
    describe_histogram!(
        METRIC_CLIMATE_LATENCY,
        "Weather provider call latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Count an inbound front-service request.
pub fn increment_cep_requests() {
    counter!(METRIC_CEP_REQUESTS).increment(1);
}

/// Count an inbound weather-service request.
pub fn increment_weather_requests() {
    counter!(METRIC_WEATHER_REQUESTS).increment(1);
}

/// Count a successful directory resolution.
pub fn increment_directory_lookups() {
    counter!(METRIC_DIRECTORY_LOOKUPS).increment(1);
}

/// Count a successful climate resolution.
pub fn increment_climate_lookups() {
    counter!(METRIC_CLIMATE_LOOKUPS).increment(1);
}

/// Count a failed lookup with its reason label.
pub fn increment_lookup_failures(reason: &'static str) {
    counter!(METRIC_LOOKUP_FAILURES, "reason" => reason).increment(1);
}

/// Record directory provider call latency.
pub fn record_directory_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_DIRECTORY_LATENCY).record(latency_ms);
}

/// Record weather provider call latency.
pub fn record_climate_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_CLIMATE_LATENCY).record(latency_ms);
}
