//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use noto_proxy::catalog::FontFace;
use noto_proxy::config::ProxyConfig;
use noto_proxy::http::{AppState, HttpServer};
use tempfile::NamedTempFile;
use tower::ServiceExt;
use wiremock::MockServer;

pub const PUBLIC_BASE_URL: &str = "https://fonts.example.com";

/// A proxy wired to two mock upstreams and a temporary catalog.
pub struct TestApp {
    pub server: HttpServer,
    pub css_upstream: MockServer,
    pub font_upstream: MockServer,
    pub catalog: NamedTempFile,
}

/// A captured response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).unwrap()
    }
}

/// A typical upstream `@font-face` block for `family` hosted on `host`.
pub fn font_face_css(family: &str, host: &str, slug: &str) -> String {
    format!(
        "/* latin */\n@font-face {{\n  font-family: '{family}';\n  font-style: normal;\n  font-weight: 400;\n  font-display: swap;\n  src: url({host}/s/{slug}/v36/0.woff2) format('woff2');\n  unicode-range: U+0000-00FF, U+0131;\n}}\n"
    )
}

/// Replace the catalog contents with `fonts`.
pub fn write_catalog(file: &NamedTempFile, fonts: &[FontFace]) {
    std::fs::write(file.path(), serde_json::to_string(fonts).unwrap()).unwrap();
}

pub fn config(css_upstream: &MockServer, font_upstream: &MockServer, catalog: &NamedTempFile) -> ProxyConfig {
    let mut config = ProxyConfig::default();
    config.public.base_url = PUBLIC_BASE_URL.to_string();
    config.upstream.css_base_url = css_upstream.uri();
    config.upstream.fonts_base_url = font_upstream.uri();
    config.catalog.path = catalog.path().to_string_lossy().into_owned();
    config
}

/// Start mock upstreams and build a proxy whose catalog holds `families`.
pub async fn spawn_app(families: &[&str]) -> TestApp {
    let css_upstream = MockServer::start().await;
    let font_upstream = MockServer::start().await;

    let fonts: Vec<FontFace> = families
        .iter()
        .map(|family| {
            let slug = family.to_lowercase().replace(' ', "");
            FontFace::new(*family, font_face_css(family, &font_upstream.uri(), &slug))
        })
        .collect();

    let catalog = NamedTempFile::new().unwrap();
    write_catalog(&catalog, &fonts);

    let config = config(&css_upstream, &font_upstream, &catalog);
    let server = HttpServer::new(AppState::with_client(config, reqwest::Client::new()));

    TestApp {
        server,
        css_upstream,
        font_upstream,
        catalog,
    }
}

/// Drive one request through the router in-process.
pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(router: Router, uri: &str) -> TestResponse {
    send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}
