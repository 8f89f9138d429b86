//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, metrics)
//! - Own the upstream caches and inject them into handlers
//! - Bind server to listener and shut down gracefully

use axum::{middleware, routing::get, Router};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::cache::UpstreamCache;
use crate::catalog::FontCatalog;
use crate::config::ProxyConfig;
use crate::css::HostRewrite;
use crate::http::handlers;
use crate::http::middleware::track_requests;

/// Application state injected into handlers.
///
/// Every request-scoped store is owned here; nothing is process-global.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub css_cache: UpstreamCache,
    pub font_cache: UpstreamCache,
    pub catalog: FontCatalog,
    pub rewrite: Arc<HostRewrite>,
}

impl AppState {
    /// Build state with a fresh upstream client configured from `config`.
    pub fn new(config: ProxyConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.upstream.user_agent.clone())
            .build()?;
        Ok(Self::with_client(config, client))
    }

    /// Build state around an existing upstream client.
    pub fn with_client(config: ProxyConfig, client: reqwest::Client) -> Self {
        let rewrite = HostRewrite::to_local_fonts(
            &config.upstream.fonts_base_url,
            &config.public.base_url,
        );

        Self {
            css_cache: UpstreamCache::new("css", client.clone()),
            font_cache: UpstreamCache::new("fonts", client),
            catalog: FontCatalog::new(&config.catalog.path),
            rewrite: Arc::new(rewrite),
            config: Arc::new(config),
        }
    }
}

/// HTTP server for the font proxy.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server around `state`.
    pub fn new(state: AppState) -> Self {
        let router = Self::build_router(state.clone());
        Self { router, state }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(state: AppState) -> Router {
        let request_timeout = Duration::from_secs(state.config.timeouts.request_secs);

        Router::new()
            .route("/", get(handlers::health))
            .route("/demo", get(handlers::demo))
            .route("/css/{*path}", get(handlers::css))
            .route("/fonts/{*path}", get(handlers::fonts))
            .route("/noto/combined.css", get(handlers::combined))
            .route("/styles/noto.css", get(handlers::combined))
            .route_layer(middleware::from_fn(track_requests))
            .with_state(state)
            .layer(TimeoutLayer::new(request_timeout))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the server until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            base_url = %self.state.config.public.base_url,
            catalog = ?self.state.catalog.path(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!(
            css_entries = self.state.css_cache.len(),
            font_entries = self.state.font_cache.len(),
            "HTTP server stopped"
        );
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
