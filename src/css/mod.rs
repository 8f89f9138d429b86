//! Stylesheet transformation subsystem.
//!
//! # Data Flow
//! ```text
//! /css route:      upstream CSS → rewrite host → [minify]
//! combined route:  catalog → combine::build → Pipeline → [minify]
//! ```
//!
//! # Design Decisions
//! - Every rewrite is a pure `&str → String` function
//! - Minification is always the final step, enforced by `Pipeline`
//! - The minifier is tuned for upstream `@font-face` output only

pub mod combine;
pub mod escape;
pub mod minify;
pub mod options;
pub mod pipeline;

pub use combine::{build, Stylesheet, DEFAULT_CSS_VAR};
pub use escape::{escape_identifier, escape_string, Quote};
pub use minify::minify;
pub use options::{FontDisplay, Nonce, TransformOptions, RANDOM_NONCE};
pub use pipeline::{HostRewrite, Pipeline, Stage};
