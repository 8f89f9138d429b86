//! Aggregate stylesheet construction.
//!
//! # Steps
//! ```text
//! ordered fonts
//!     → rewrite asset host per font
//!     → concatenate with "/* === <family> === */" headers
//!     → merge families  |  declare :root custom property
//!     → display override (optional)
//!     → nonce injection (optional)
//!     → minify (optional, always last)
//! ```

use crate::catalog::{FontFace, DEFAULT_FAMILY};
use crate::css::options::TransformOptions;
use crate::css::pipeline::{HostRewrite, Pipeline, Stage};

/// Custom property name used when the request does not supply `cssvar`.
pub const DEFAULT_CSS_VAR: &str = "noto-combined";

/// A built stylesheet and whether it may be cached downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    pub css: String,
    pub cacheable: bool,
}

/// Concatenate `fonts` after pointing their asset URLs at the local host.
pub fn concatenate(fonts: &[FontFace], rewrite: &HostRewrite) -> String {
    fonts
        .iter()
        .map(|font| format!("/* === {} === */\n{}", font.family, rewrite.apply(&font.styles)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Assemble the post-concatenation pipeline for `options`.
pub fn pipeline(fonts: &[FontFace], options: &TransformOptions) -> Pipeline {
    let families = if options.merge {
        Stage::MergeFamilies {
            family: DEFAULT_FAMILY.to_string(),
        }
    } else {
        Stage::DeclareFamilies {
            var_name: options
                .cssvar
                .clone()
                .unwrap_or_else(|| DEFAULT_CSS_VAR.to_string()),
            families: fonts.iter().map(|f| f.family.clone()).collect(),
        }
    };

    Pipeline::builder()
        .stage(families)
        .stage_opt(options.display.map(Stage::Display))
        .stage_opt(
            options
                .nonce
                .as_ref()
                .map(|nonce| Stage::BustAssetCache { nonce: nonce.resolve() }),
        )
        .minify(options.minify)
        .build()
}

/// Build the combined stylesheet for already ordered `fonts`.
pub fn build(fonts: &[FontFace], rewrite: &HostRewrite, options: &TransformOptions) -> Stylesheet {
    let pipeline = pipeline(fonts, options);
    tracing::debug!(
        families = fonts.len(),
        stages = ?pipeline.stage_names(),
        "Building combined stylesheet"
    );

    Stylesheet {
        css: pipeline.run(&concatenate(fonts, rewrite)),
        cacheable: options.is_cacheable(),
    }
}
