//! Ordered stylesheet rewriting.
//!
//! # Responsibilities
//! - Model each text rewrite as a named [`Stage`]
//! - Run stages in insertion order over an immutable input
//! - Run minification strictly after every stage
//!
//! # Design Decisions
//! - Minification is not a stage. It is a terminal flag on the builder, so
//!   no stage can be ordered after it
//! - Stages take `&str` and return a new `String`; the input is never mutated

use once_cell::sync::Lazy;
use regex::Regex;

use crate::css::escape::{escape_identifier, escape_string, Quote};
use crate::css::minify::minify;
use crate::css::options::FontDisplay;

static FONT_FAMILY_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"font-family:\s*'[^']+';").unwrap());

static WOFF2_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(url\([^()]*?\.woff2)\)").unwrap());

/// Upstream asset host and its local replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRewrite {
    pub from: String,
    pub to: String,
}

impl HostRewrite {
    /// Map `upstream_host` to `<public_base_url>/fonts`.
    pub fn to_local_fonts(upstream_host: &str, public_base_url: &str) -> Self {
        Self {
            from: upstream_host.trim_end_matches('/').to_string(),
            to: format!("{}/fonts", public_base_url.trim_end_matches('/')),
        }
    }

    pub fn apply(&self, css: &str) -> String {
        css.replace(&self.from, &self.to)
    }
}

/// A single named rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Point asset URLs at the local font route.
    RewriteHost(HostRewrite),
    /// Collapse every `font-family: '<x>';` declaration onto one family.
    MergeFamilies { family: String },
    /// Append a `:root` custom property listing `families` in order.
    DeclareFamilies { var_name: String, families: Vec<String> },
    /// Replace the stored `font-display: swap` with another value.
    Display(FontDisplay),
    /// Append `?nonce=<value>` to every `.woff2` `url(...)`.
    BustAssetCache { nonce: String },
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::RewriteHost(_) => "rewrite_host",
            Stage::MergeFamilies { .. } => "merge_families",
            Stage::DeclareFamilies { .. } => "declare_families",
            Stage::Display(_) => "display",
            Stage::BustAssetCache { .. } => "bust_asset_cache",
        }
    }

    pub fn apply(&self, css: &str) -> String {
        match self {
            Stage::RewriteHost(rewrite) => rewrite.apply(css),
            Stage::MergeFamilies { family } => {
                let replacement = format!("font-family: {};", escape_string(family, Quote::Single));
                FONT_FAMILY_DECL
                    .replace_all(css, regex::NoExpand(&replacement))
                    .into_owned()
            }
            Stage::DeclareFamilies { var_name, families } => {
                let list = families
                    .iter()
                    .map(|f| escape_string(f, Quote::Single))
                    .collect::<Vec<_>>()
                    .join(", ");
                let block = [
                    "/* === All Noto Fonts === */".to_string(),
                    ":root {".to_string(),
                    format!("  --{}: {};", escape_identifier(var_name), list),
                    "}".to_string(),
                ]
                .join("\n");
                [css, block.as_str()].join("\n\n")
            }
            Stage::Display(display) => {
                css.replace("font-display: swap", &format!("font-display: {}", display.as_str()))
            }
            Stage::BustAssetCache { nonce } => {
                let encoded: String = url::form_urlencoded::byte_serialize(nonce.as_bytes()).collect();
                let replacement = format!("${{1}}?nonce={})", encoded);
                WOFF2_URL.replace_all(css, replacement.as_str()).into_owned()
            }
        }
    }
}

/// An ordered list of stages with optional trailing minification.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    stages: Vec<Stage>,
    minify: bool,
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Stage names in execution order, `minify` last when enabled.
    pub fn stage_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.stages.iter().map(Stage::name).collect();
        if self.minify {
            names.push("minify");
        }
        names
    }

    pub fn run(&self, input: &str) -> String {
        let mut css = input.to_string();
        for stage in &self.stages {
            css = stage.apply(&css);
        }
        if self.minify {
            css = minify(&css);
        }
        css
    }
}

#[derive(Debug, Default)]
pub struct PipelineBuilder {
    stages: Vec<Stage>,
    minify: bool,
}

impl PipelineBuilder {
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn stage_opt(self, stage: Option<Stage>) -> Self {
        match stage {
            Some(stage) => self.stage(stage),
            None => self,
        }
    }

    /// Request minification. It always runs after the last stage.
    pub fn minify(mut self, enabled: bool) -> Self {
        self.minify = enabled;
        self
    }

    pub fn build(self) -> Pipeline {
        Pipeline {
            stages: self.stages,
            minify: self.minify,
        }
    }
}
