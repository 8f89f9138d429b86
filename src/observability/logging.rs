//! Structured logging.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is not set.
pub fn default_filter(level: &str) -> String {
    format!("noto_proxy={level},tower_http={level}")
}

/// Install the global subscriber. `RUST_LOG` wins over `level`.
pub fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level).into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        let filter = default_filter("debug");
        assert_eq!(filter, "noto_proxy=debug,tower_http=debug");
        assert!(EnvFilter::try_new(filter).is_ok());
    }
}
