//! Request inspection helpers.
//!
//! # Responsibilities
//! - Map a local route path onto the upstream base URL
//! - Detect the client refresh signal
//! - Strip parameters that must not reach the upstream

use axum::http::{header, HeaderMap};
use url::Url;

use crate::http::error::AppError;

/// Header set on every request and echoed on every response.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Query parameter carrying the asset cache-busting nonce.
pub const NONCE_PARAM: &str = "nonce";

/// Join `rest` (path after the route prefix, no leading slash) and `query`
/// onto `base`.
pub fn upstream_url(base: &str, rest: &str, query: Option<&str>) -> Result<Url, AppError> {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), rest);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }

    Url::parse(&url).map_err(|source| AppError::UpstreamUrl { url, source })
}

/// Remove every `name` pair from a raw query, keeping the rest verbatim.
pub fn strip_query_param(query: Option<&str>, name: &str) -> Option<String> {
    let kept: Vec<&str> = query?
        .split('&')
        .filter(|pair| !pair.is_empty() && pair.split('=').next() != Some(name))
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some(kept.join("&"))
    }
}

/// Whether the client asked to bypass the upstream cache
/// (`Cache-Control: no-cache`).
pub fn wants_refresh(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::CACHE_CONTROL)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .any(|directive| directive.trim().eq_ignore_ascii_case("no-cache"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_upstream_url() {
        let url = upstream_url("https://fonts.googleapis.com/", "css2", Some("family=Noto+Sans&display=swap")).unwrap();
        assert_eq!(url.as_str(), "https://fonts.googleapis.com/css2?family=Noto+Sans&display=swap");

        let url = upstream_url("https://fonts.gstatic.com", "s/notosans/v1/a.woff2", None).unwrap();
        assert_eq!(url.as_str(), "https://fonts.gstatic.com/s/notosans/v1/a.woff2");

        let url = upstream_url("https://fonts.gstatic.com", "a.woff2", Some("")).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_upstream_url_invalid_base() {
        assert!(matches!(
            upstream_url("not a base", "x", None),
            Err(AppError::UpstreamUrl { .. })
        ));
    }

    #[test]
    fn test_strip_query_param() {
        assert_eq!(strip_query_param(None, "nonce"), None);
        assert_eq!(strip_query_param(Some("nonce=abc"), "nonce"), None);
        assert_eq!(
            strip_query_param(Some("a=1&nonce=abc&b=2"), "nonce").as_deref(),
            Some("a=1&b=2")
        );
        assert_eq!(strip_query_param(Some("nonces=1"), "nonce").as_deref(), Some("nonces=1"));
    }

    #[test]
    fn test_wants_refresh() {
        let mut headers = HeaderMap::new();
        assert!(!wants_refresh(&headers));

        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
        assert!(!wants_refresh(&headers));

        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("max-age=0, No-Cache"));
        assert!(wants_refresh(&headers));
    }
}
