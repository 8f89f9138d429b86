//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate URLs and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs after environment overrides, before the server starts

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is empty")]
    Empty { field: &'static str },

    #[error("{field} is not a valid http(s) URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("public.base_url must not carry a query or fragment: {0}")]
    BaseUrlHasQuery(String),

    #[error("listener.port must be non-zero")]
    ZeroPort,

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("observability.metrics_address is not a socket address: {0}")]
    InvalidMetricsAddress(String),
}

fn check_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) -> Option<Url> {
    if value.is_empty() {
        errors.push(ValidationError::Empty { field });
        return None;
    }
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Some(url),
        _ => {
            errors.push(ValidationError::InvalidUrl {
                field,
                value: value.to_string(),
            });
            None
        }
    }
}

/// Validate `config`, collecting every problem found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(url) = check_url("public.base_url", &config.public.base_url, &mut errors) {
        if url.query().is_some() || url.fragment().is_some() {
            errors.push(ValidationError::BaseUrlHasQuery(config.public.base_url.clone()));
        }
    }
    check_url("upstream.css_base_url", &config.upstream.css_base_url, &mut errors);
    check_url("upstream.fonts_base_url", &config.upstream.fonts_base_url, &mut errors);

    if config.upstream.user_agent.is_empty() {
        errors.push(ValidationError::Empty {
            field: "upstream.user_agent",
        });
    }
    if config.catalog.path.is_empty() {
        errors.push(ValidationError::Empty { field: "catalog.path" });
    }
    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if config.caching.stylesheet_max_age_secs == 0 {
        errors.push(ValidationError::NotPositive {
            field: "caching.stylesheet_max_age_secs",
        });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::NotPositive {
            field: "timeouts.request_secs",
        });
    }
    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<std::net::SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
