//! Caching, rewriting front for a web-font delivery API.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod css;
pub mod http;
pub mod observability;

pub use config::schema::ProxyConfig;
pub use http::{AppState, HttpServer};
