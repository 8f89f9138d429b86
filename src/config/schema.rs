//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Upstream CSS API.
pub const GOOGLE_CSS_BASE_URL: &str = "https://fonts.googleapis.com";

/// Upstream font asset host.
pub const GOOGLE_FONTS_BASE_URL: &str = "https://fonts.gstatic.com";

/// Thirty days, the stylesheet cache lifetime.
pub const ONE_MONTH_SECS: u64 = 30 * 24 * 60 * 60;

/// Root configuration for the font proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (host, port).
    pub listener: ListenerConfig,

    /// How clients reach this service.
    pub public: PublicConfig,

    /// Upstream font service endpoints.
    pub upstream: UpstreamConfig,

    /// Static catalog location.
    pub catalog: CatalogConfig,

    /// Response cache headers.
    pub caching: CachingConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,

    /// TCP port.
    pub port: u16,
}

impl ListenerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 443,
        }
    }
}

/// Public-facing settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PublicConfig {
    /// Externally reachable base URL, without trailing slash
    /// (e.g., "https://fonts.example.com"). Asset URLs are rewritten to
    /// `<base_url>/fonts/...`.
    pub base_url: String,
}

impl Default for PublicConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:443".to_string(),
        }
    }
}

/// Upstream font service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the CSS API.
    pub css_base_url: String,

    /// Base URL of the font asset host. Occurrences in CSS are rewritten.
    pub fonts_base_url: String,

    /// User-Agent sent upstream. The CSS API picks the font format from it,
    /// so it must look like a browser that supports woff2.
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            css_base_url: GOOGLE_CSS_BASE_URL.to_string(),
            fonts_base_url: GOOGLE_FONTS_BASE_URL.to_string(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the JSON catalog of `{family, styles}` records.
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: "./data/fonts.json".to_string(),
        }
    }
}

/// Downstream caching headers.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CachingConfig {
    /// `max-age` and `Expires` offset for combined stylesheets, in seconds.
    pub stylesheet_max_age_secs: u64,
}

impl Default for CachingConfig {
    fn default() -> Self {
        Self {
            stylesheet_max_age_secs: ONE_MONTH_SECS,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 60 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProxyConfig::default();
        assert_eq!(config.listener.bind_address(), "0.0.0.0:443");
        assert_eq!(config.upstream.css_base_url, GOOGLE_CSS_BASE_URL);
        assert_eq!(config.caching.stylesheet_max_age_secs, 2_592_000);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_toml() {
        let config: ProxyConfig = toml::from_str(
            r#"
            [public]
            base_url = "https://fonts.example.com"

            [listener]
            port = 8080
            "#,
        )
        .unwrap();

        assert_eq!(config.public.base_url, "https://fonts.example.com");
        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.listener.host, "0.0.0.0");
        assert_eq!(config.catalog.path, "./data/fonts.json");
    }
}
