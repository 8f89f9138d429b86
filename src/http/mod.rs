//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace, timeout)
//!     → middleware/ (per-route metrics)
//!     → handlers.rs (route dispatch)
//!         → request.rs (upstream URL, refresh signal)
//!         → cache / catalog / css
//!     → response.rs (replay upstream headers, cache headers)
//!     → Send to client
//! ```

pub mod demo;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use error::AppError;
pub use request::X_REQUEST_ID;
pub use server::{shutdown_signal, AppState, HttpServer};
