//! Demo page rendering.
//!
//! A static HTML page that loads the combined stylesheet with the same query
//! options and shows a few lines of mixed-script sample text.

use crate::catalog::DEFAULT_FAMILY;
use crate::css::{escape_identifier, TransformOptions, DEFAULT_CSS_VAR};

const SAMPLE_LINES: [&str; 4] = [
    "AAAAAAAA",
    "ＡＡＡＡＡＡＡＡＡＡＡＡ",
    "<em>Hello</em>, <strong>world</strong>! 🎉",
    "你好，世界！",
];

/// Render the page. `query` is the raw incoming query string.
pub fn render_demo(base_url: &str, query: Option<&str>) -> String {
    let query = query.filter(|q| !q.is_empty());
    let href = match query {
        Some(q) => format!("{}/styles/noto.css?{}", base_url, q),
        None => format!("{}/styles/noto.css", base_url),
    };

    let options = TransformOptions::from_query(query);
    let family = if options.merge {
        DEFAULT_FAMILY.to_string()
    } else {
        let var = options.cssvar.as_deref().unwrap_or(DEFAULT_CSS_VAR);
        format!("var(--{})", escape_identifier(var))
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
	<head>
		<title>Noto fonts demo</title>
		<link rel="stylesheet" href="{href}">
		<style>
		.demo {{
			white-space: pre-wrap;
			font-family: {family};
			margin-block-end: .5em;
		}}
		.below {{
			height: 10px;
			background: red;
		}}
		</style>
	</head>
	<body>
		<div class="demo">{sample}</div>
		<div class="below"></div>
	</body>
</html>"#,
        href = html_escape::encode_double_quoted_attribute(&href),
        family = family,
        sample = SAMPLE_LINES.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_without_query() {
        let html = render_demo("https://fonts.example.com", None);
        assert!(html.contains(r#"href="https://fonts.example.com/styles/noto.css""#));
        assert!(html.contains("font-family: var(--noto-combined);"));
    }

    #[test]
    fn test_link_carries_query() {
        let html = render_demo("https://fonts.example.com", Some("merge&display=block"));
        assert!(html.contains(r#"href="https://fonts.example.com/styles/noto.css?merge&amp;display=block""#));
        assert!(html.contains("font-family: Noto Sans;"));
    }

    #[test]
    fn test_link_escapes_markup() {
        let html = render_demo("https://fonts.example.com", Some("cssvar=%22x%22&a=<b>"));
        assert!(html.contains(r#"href="https://fonts.example.com/styles/noto.css?cssvar=%22x%22&amp;a=&lt;b&gt;""#));
    }

    #[test]
    fn test_custom_var() {
        let html = render_demo("https://fonts.example.com", Some("cssvar=1x"));
        assert!(html.contains("font-family: var(--\\31 x);"));
    }
}
