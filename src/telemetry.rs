//! Telemetry module for zora-coins
//!
//! Prometheus counters for dispatched commands and SDK API requests.

use crate::{CoinsError, Result};
use once_cell::sync::Lazy;
use prometheus::{CounterVec, Encoder, TextEncoder, register_counter_vec};

/// Commands dispatched, by outcome
static COMMANDS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "zora_coins_commands_total",
        "Total number of commands dispatched",
        &["command", "status"]
    )
    .unwrap()
});

/// SDK API requests, by endpoint and HTTP status
static API_REQUESTS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "zora_coins_api_requests_total",
        "Total number of SDK API requests",
        &["endpoint", "status"]
    )
    .unwrap()
});

/// Record a dispatched command
pub fn record_command(command: &str, status: &str) {
    COMMANDS_TOTAL.with_label_values(&[command, status]).inc();
}

/// Record an SDK API request
pub fn record_api_request(endpoint: &str, status_code: u16) {
    let status = status_code.to_string();
    API_REQUESTS_TOTAL
        .with_label_values(&[endpoint, status.as_str()])
        .inc();
}

/// Get Prometheus metrics in text format
pub fn get_metrics() -> Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| CoinsError::Io(std::io::Error::other(format!("Failed to encode metrics: {}", e))))?;

    String::from_utf8(buffer)
        .map_err(|e| CoinsError::Io(std::io::Error::other(format!("Failed to convert metrics to UTF-8: {}", e))))
}
