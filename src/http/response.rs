//! Response construction.
//!
//! # Responsibilities
//! - Replay cached upstream responses (status + headers) to the client
//! - Compute downstream caching headers for generated stylesheets
//!
//! # Design Decisions
//! - Hop-by-hop headers are stripped when replaying
//! - `content-length` is always dropped; the body we send decides it
//! - `Expires` is computed from the current time on every response

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Response};
use std::time::{Duration, SystemTime};

use crate::cache::CachedResponse;

const HOP_BY_HOP: [HeaderName; 7] = [
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

fn is_forwardable(name: &HeaderName) -> bool {
    *name != header::CONTENT_LENGTH && name.as_str() != "keep-alive" && !HOP_BY_HOP.contains(name)
}

/// Copy `upstream` status and forwardable headers around `body`.
pub fn replay(upstream: &CachedResponse, body: impl Into<Body>) -> Response<Body> {
    let mut response = Response::new(body.into());
    *response.status_mut() = upstream.status;

    let headers = response.headers_mut();
    for (name, value) in upstream.headers.iter() {
        if is_forwardable(name) {
            headers.append(name.clone(), value.clone());
        }
    }
    response
}

/// `Cache-Control: public, max-age=<secs>` and the matching `Expires`.
pub fn cache_headers(max_age: Duration) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let expires = httpdate::fmt_http_date(SystemTime::now() + max_age);

    if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={}", max_age.as_secs())) {
        headers.insert(header::CACHE_CONTROL, value);
    }
    if let Ok(value) = HeaderValue::from_str(&expires) {
        headers.insert(header::EXPIRES, value);
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use axum::http::StatusCode;

    #[test]
    fn test_replay_filters_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("font/woff2"));
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("4"));
        headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
        headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
        headers.append(header::VARY, HeaderValue::from_static("Origin"));
        headers.append(header::VARY, HeaderValue::from_static("Accept"));

        let upstream = CachedResponse {
            status: StatusCode::NOT_FOUND,
            headers,
            body: Bytes::from_static(b"gone"),
        };
        let response = replay(&upstream, upstream.body.clone());

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "font/woff2");
        assert_eq!(response.headers().get_all(header::VARY).iter().count(), 2);
        assert!(response.headers().get(header::CONTENT_LENGTH).is_none());
        assert!(response.headers().get(header::TRANSFER_ENCODING).is_none());
        assert!(response.headers().get("keep-alive").is_none());
    }

    #[test]
    fn test_cache_headers() {
        let headers = cache_headers(Duration::from_secs(2_592_000));
        assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=2592000");

        let expires = headers[header::EXPIRES].to_str().unwrap();
        let at = httpdate::parse_http_date(expires).unwrap();
        let ahead = at.duration_since(SystemTime::now()).unwrap();
        assert!(ahead > Duration::from_secs(2_591_000));
    }
}
