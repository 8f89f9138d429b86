//! Memoizing upstream fetcher.

use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode};
use dashmap::DashMap;
use std::sync::Arc;
use thiserror::Error;
use url::Url;

use crate::observability::metrics;

/// Errors raised while talking to the upstream.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Connection failure, TLS failure, or the body could not be read.
    #[error("upstream fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// A captured upstream response.
#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Permanent URL-keyed memoization of upstream GETs.
///
/// Cloning is cheap and clones share the same entries.
#[derive(Clone)]
pub struct UpstreamCache {
    name: &'static str,
    client: reqwest::Client,
    entries: Arc<DashMap<String, Arc<CachedResponse>>>,
}

impl UpstreamCache {
    /// Create an empty cache. `name` labels logs and metrics.
    pub fn new(name: &'static str, client: reqwest::Client) -> Self {
        Self {
            name,
            client,
            entries: Arc::new(DashMap::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return the stored response for `url`, fetching it on first use.
    pub async fn get(&self, url: &Url) -> Result<Arc<CachedResponse>, CacheError> {
        let cached = self.entries.get(url.as_str()).map(|r| r.value().clone());
        if let Some(hit) = cached {
            metrics::record_cache_lookup(self.name, "hit");
            return Ok(hit);
        }

        metrics::record_cache_lookup(self.name, "miss");
        let response = Arc::new(self.fetch(url).await?);
        self.entries.insert(url.as_str().to_string(), response.clone());

        tracing::debug!(
            cache = self.name,
            url = %url,
            status = %response.status,
            entries = self.entries.len(),
            "Cached upstream response"
        );
        Ok(response)
    }

    /// Fetch `url` without reading or writing the store.
    ///
    /// Used for client-requested refreshes; any stored entry stays as is.
    pub async fn fetch_uncached(&self, url: &Url) -> Result<Arc<CachedResponse>, CacheError> {
        metrics::record_cache_lookup(self.name, "bypass");
        Ok(Arc::new(self.fetch(url).await?))
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.entries.contains_key(url.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    async fn fetch(&self, url: &Url) -> Result<CachedResponse, CacheError> {
        let result = async {
            let response = self.client.get(url.clone()).send().await?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(CachedResponse {
                status,
                headers,
                body,
            })
        }
        .await;

        match result {
            Ok(response) => {
                metrics::record_upstream_fetch(self.name, "ok");
                if !response.status.is_success() {
                    tracing::warn!(
                        cache = self.name,
                        url = %url,
                        status = %response.status,
                        "Upstream returned non-success status"
                    );
                }
                Ok(response)
            }
            Err(e) => {
                metrics::record_upstream_fetch(self.name, "error");
                tracing::error!(cache = self.name, url = %url, error = %e, "Upstream fetch failed");
                Err(CacheError::Fetch(e))
            }
        }
    }
}
