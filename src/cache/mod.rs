//! Upstream response caching subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → UpstreamCache::get(url)
//!         hit  → shared Arc<CachedResponse>, no network
//!         miss → reqwest GET → capture status/headers/body
//!              → insert under url → return
//! ```
//!
//! # Design Decisions
//! - Entries are written once and live for the process lifetime: no expiry,
//!   no size bound, no eviction
//! - Non-2xx upstream responses are cached and replayed like any other
//! - Concurrent misses on one key are not coalesced; each fetches and the
//!   last insert wins
//! - Map shards are locked only for the lookup/insert, never across the
//!   network call

pub mod upstream;

pub use upstream::{CacheError, CachedResponse, UpstreamCache};
