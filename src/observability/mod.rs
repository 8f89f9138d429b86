//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and caches produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (fmt layer, filtered by RUST_LOG / config)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through logs via tower-http
//! - Metric calls are no-ops until a recorder is installed, so library
//!   code and tests never need to set one up

pub mod logging;
pub mod metrics;
