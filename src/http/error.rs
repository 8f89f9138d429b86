//! Handler error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::cache::CacheError;
use crate::catalog::CatalogError;

/// Errors that end a request early.
#[derive(Debug, Error)]
pub enum AppError {
    /// Upstream unreachable or its body unreadable.
    #[error(transparent)]
    Upstream(#[from] CacheError),

    /// Catalog missing or malformed; a deployment defect.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The request path cannot be mapped onto the upstream base URL.
    #[error("invalid upstream URL {url}: {source}")]
    UpstreamUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamUrl { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Upstream(_) => "Upstream request failed",
            AppError::Catalog(_) => "Internal Server Error",
            AppError::UpstreamUrl { .. } => "Invalid path",
        };

        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "Request failed");
        } else {
            tracing::warn!(error = %self, status = %status, "Request rejected");
        }

        (status, body).into_response()
    }
}
