//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::ProxyConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values taken from the process environment (`BASE_URL`, `PORT`).
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub base_url: Option<String>,
    pub port: Option<u16>,
}

impl EnvOverrides {
    pub fn apply(&self, config: &mut ProxyConfig) {
        if let Some(base_url) = &self.base_url {
            config.public.base_url = base_url.clone();
        }
        if let Some(port) = self.port {
            config.listener.port = port;
        }
    }
}

/// Parse a TOML file without validating it.
pub fn read_config(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Build the effective configuration: file (or defaults), then overrides,
/// then validation.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &EnvOverrides,
) -> Result<ProxyConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => ProxyConfig::default(),
    };

    overrides.apply(&mut config);
    config.public.base_url = config.public.base_url.trim_end_matches('/').to_string();

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_overrides_win_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[public]\nbase_url = \"https://a.example.com\"\n[listener]\nport = 8000").unwrap();

        let overrides = EnvOverrides {
            base_url: Some("https://b.example.com/".into()),
            port: None,
        };
        let config = resolve_config(Some(file.path()), &overrides).unwrap();

        assert_eq!(config.public.base_url, "https://b.example.com");
        assert_eq!(config.listener.port, 8000);
    }

    #[test]
    fn test_defaults_without_file() {
        let overrides = EnvOverrides {
            base_url: None,
            port: Some(3000),
        };
        let config = resolve_config(None, &overrides).unwrap();
        assert_eq!(config.listener.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[listener\nport = ").unwrap();

        assert!(matches!(load_config(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation_error_display() {
        let overrides = EnvOverrides {
            base_url: Some("nope".into()),
            port: Some(0),
        };
        let err = resolve_config(None, &overrides).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("listener.port must be non-zero"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/noto-proxy.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
