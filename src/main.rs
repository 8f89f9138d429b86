//! Noto font proxy (v1)
//!
//! Serves Google Fonts CSS and font files under the operator's own domain,
//! plus a combined stylesheet built from a static catalog of Noto families.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────────┐
//!                       │                    NOTO PROXY                     │
//!                       │                                                   │
//!   Client Request      │  ┌─────────┐    ┌──────────┐    ┌─────────────┐  │
//!   ────────────────────┼─▶│  http   │───▶│ handlers │───▶│    cache    │──┼──▶ fonts.googleapis.com
//!                       │  │ server  │    │          │    │ (memoized)  │──┼──▶ fonts.gstatic.com
//!                       │  └─────────┘    └────┬─────┘    └─────────────┘  │
//!                       │                      │                            │
//!                       │                      ▼                            │
//!                       │  ┌─────────┐    ┌──────────┐    ┌─────────────┐  │
//!   Client Response     │  │response │◀───│   css    │◀───│   catalog   │◀─┼─── data/fonts.json
//!   ◀───────────────────┼──│ headers │    │ pipeline │    │  priority   │  │
//!                       │  └─────────┘    └──────────┘    └─────────────┘  │
//!                       │                                                   │
//!                       │  Cross-cutting: config · logging · metrics        │
//!                       └──────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use noto_proxy::config::{resolve_config, EnvOverrides};
use noto_proxy::http::{shutdown_signal, AppState, HttpServer};
use noto_proxy::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "noto-proxy")]
#[command(about = "Caching, rewriting proxy for Google Fonts", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Externally reachable base URL used when rewriting asset URLs.
    #[arg(long, env = "BASE_URL")]
    base_url: Option<String>,

    /// Listen port.
    #[arg(long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = EnvOverrides {
        base_url: cli.base_url,
        port: cli.port,
    };
    let config = resolve_config(cli.config.as_deref(), &overrides)?;

    logging::init_logging(&config.observability.log_level);
    tracing::info!("noto-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        base_url = %config.public.base_url,
        css_upstream = %config.upstream.css_base_url,
        fonts_upstream = %config.upstream.fonts_base_url,
        catalog = %config.catalog.path,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validation already checked the address.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(AppState::new(config)?);
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
