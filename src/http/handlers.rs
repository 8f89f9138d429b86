//! Route handlers.
//!
//! # Routes
//! - `GET /`                    liveness
//! - `GET /demo`                demo page
//! - `GET /css/{*path}`         upstream CSS, host-rewritten, optional minify
//! - `GET /fonts/{*path}`       upstream font bytes, passthrough
//! - `GET /noto/combined.css`   combined catalog stylesheet
//! - `GET /styles/noto.css`     alias of the above

use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderMap, HeaderValue, Uri},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::cache::{CachedResponse, UpstreamCache};
use crate::css::{self, Pipeline, Stage, TransformOptions};
use crate::http::demo::render_demo;
use crate::http::error::AppError;
use crate::http::request::{strip_query_param, upstream_url, wants_refresh, NONCE_PARAM};
use crate::http::response::{cache_headers, replay};
use crate::http::server::AppState;

const TEXT_CSS: &str = "text/css; charset=utf-8";

/// Path after `prefix`, without its leading slash.
fn route_rest<'a>(uri: &'a Uri, prefix: &str) -> &'a str {
    uri.path()
        .strip_prefix(prefix)
        .unwrap_or_default()
        .trim_start_matches('/')
}

async fn lookup(
    cache: &UpstreamCache,
    url: &Url,
    headers: &HeaderMap,
) -> Result<Arc<CachedResponse>, AppError> {
    if wants_refresh(headers) {
        tracing::debug!(cache = cache.name(), url = %url, "Client requested refresh, bypassing cache");
        return Ok(cache.fetch_uncached(url).await?);
    }
    Ok(cache.get(url).await?)
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn demo(State(state): State<AppState>, RawQuery(query): RawQuery) -> Html<String> {
    Html(render_demo(&state.config.public.base_url, query.as_deref()))
}

/// Proxy a stylesheet request to the upstream CSS API.
pub async fn css(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let query = uri.query();
    let url = upstream_url(
        &state.config.upstream.css_base_url,
        route_rest(&uri, "/css"),
        query,
    )?;

    let upstream = lookup(&state.css_cache, &url, &headers).await?;
    let options = TransformOptions::from_query(query);
    tracing::debug!(
        family = options.family.as_deref().unwrap_or_default(),
        status = %upstream.status,
        minify = options.minify,
        "Serving upstream stylesheet"
    );

    let css = Pipeline::builder()
        .stage(Stage::RewriteHost(state.rewrite.as_ref().clone()))
        .minify(options.minify)
        .build()
        .run(&String::from_utf8_lossy(&upstream.body));

    Ok(replay(&upstream, css))
}

/// Serve a font asset byte-for-byte from the upstream asset host.
pub async fn fonts(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let query = strip_query_param(uri.query(), NONCE_PARAM);
    let url = upstream_url(
        &state.config.upstream.fonts_base_url,
        route_rest(&uri, "/fonts"),
        query.as_deref(),
    )?;

    let upstream = lookup(&state.font_cache, &url, &headers).await?;
    Ok(replay(&upstream, upstream.body.clone()))
}

/// Build the combined stylesheet from the static catalog.
pub async fn combined(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let options = TransformOptions::from_query(query.as_deref());
    let fonts = state.catalog.load_selected().await?;
    let sheet = css::build(&fonts, &state.rewrite, &options);

    let mut response = sheet.css.into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_CSS));

    if sheet.cacheable {
        let max_age = Duration::from_secs(state.config.caching.stylesheet_max_age_secs);
        headers.extend(cache_headers(max_age));
    }

    Ok(response)
}
