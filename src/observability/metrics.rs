//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_submissions_total` (counter): form submissions handled
//! - `relay_submit_duration_seconds` (histogram): handler latency including
//!   the artificial delay
//!
//! # Design Decisions
//! - Exposition is opt-in; the recorder is only installed when enabled
//! - Metric updates are low-overhead atomic operations

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Install the Prometheus recorder and exposition listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            describe();
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

fn describe() {
    metrics::describe_counter!(
        "relay_submissions_total",
        "Total form submissions handled"
    );
    metrics::describe_histogram!(
        "relay_submit_duration_seconds",
        "Submit handler latency in seconds, including the artificial delay"
    );
}
