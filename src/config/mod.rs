//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, or defaults)
//!     → BASE_URL / PORT environment overrides
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError, EnvOverrides};
pub use schema::ProxyConfig;
pub use schema::{
    CachingConfig, CatalogConfig, ListenerConfig, ObservabilityConfig, PublicConfig,
    TimeoutConfig, UpstreamConfig,
};
pub use validation::{validate_config, ValidationError};
