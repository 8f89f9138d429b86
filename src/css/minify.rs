//! Whitespace compaction for generated `@font-face` stylesheets.
//!
//! Not a general-purpose CSS minifier: it only handles the well-formed,
//! comment-delimited CSS that upstream emits and this service combines.
//! On that input it matches a real minifier at a fraction of the cost.

use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Literal replacements, applied in order after whitespace is collapsed.
const REPLACEMENTS: [(&str, &str); 5] = [
    ("; } ", "}"),
    ("; ", ";"),
    (": ", ":"),
    (", ", ","),
    (" { ", "{"),
];

/// Compact `css`. Must run after every other rewrite of the same text.
pub fn minify(css: &str) -> String {
    let css = COMMENT.replace_all(css, "");
    let mut css = WHITESPACE.replace_all(&css, " ").into_owned();

    for (from, to) in REPLACEMENTS {
        css = css.replace(from, to);
    }

    css.trim().to_string()
}
