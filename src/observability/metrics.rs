//! Metrics collection and exposition.
//!
//! # Metrics
//! - `console_requests_total` (counter): handled requests by method, status
//! - `console_request_duration_seconds` (histogram): latency distribution
//! - `console_modules_loaded` (gauge): registered module count
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; with no exporter
//!   installed every update is a no-op

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on `addr`.
///
/// Failure to install is logged, not fatal: the console serves without
/// exposition and recorded metrics fall through to the no-op recorder.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("console_requests_total", &labels).increment(1);
    metrics::histogram!("console_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

/// Update the registered-module gauge.
pub fn set_modules_loaded(count: usize) {
    metrics::gauge!("console_modules_loaded").set(count as f64);
}
