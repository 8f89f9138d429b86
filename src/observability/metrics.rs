//! Metrics collection and exposition.
//!
//! # Metrics
//! - `noto_proxy_requests_total` (counter): requests by route, status
//! - `noto_proxy_request_duration_seconds` (histogram): latency by route
//! - `noto_proxy_cache_lookups_total` (counter): hit/miss/bypass by cache
//! - `noto_proxy_upstream_fetches_total` (counter): ok/error by cache

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(route: &str, status: u16, start: Instant) {
    ::metrics::counter!(
        "noto_proxy_requests_total",
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!("noto_proxy_request_duration_seconds", "route" => route.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_cache_lookup(cache: &'static str, outcome: &'static str) {
    ::metrics::counter!(
        "noto_proxy_cache_lookups_total",
        "cache" => cache,
        "outcome" => outcome
    )
    .increment(1);
}

pub fn record_upstream_fetch(cache: &'static str, outcome: &'static str) {
    ::metrics::counter!(
        "noto_proxy_upstream_fetches_total",
        "cache" => cache,
        "outcome" => outcome
    )
    .increment(1);
}
