//! Per-route request accounting.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::observability::metrics;

/// Record status and latency for every matched route.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    let status = response.status();

    tracing::debug!(
        route = %route,
        status = %status,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Request complete"
    );
    metrics::record_request(&route, status.as_u16(), start);
    response
}
