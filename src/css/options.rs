//! Per-request transform options parsed from the query string.
//!
//! Unknown keys and out-of-range values are ignored; nothing here ever
//! produces a client error.

use std::collections::HashSet;
use std::str::FromStr;

/// Query value that asks for a fresh nonce on every call.
pub const RANDOM_NONCE: &str = "random";

/// Accepted `font-display` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontDisplay {
    Auto,
    Block,
    Swap,
    Fallback,
    Optional,
}

impl FontDisplay {
    pub fn as_str(self) -> &'static str {
        match self {
            FontDisplay::Auto => "auto",
            FontDisplay::Block => "block",
            FontDisplay::Swap => "swap",
            FontDisplay::Fallback => "fallback",
            FontDisplay::Optional => "optional",
        }
    }
}

impl FromStr for FontDisplay {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(FontDisplay::Auto),
            "block" => Ok(FontDisplay::Block),
            "swap" => Ok(FontDisplay::Swap),
            "fallback" => Ok(FontDisplay::Fallback),
            "optional" => Ok(FontDisplay::Optional),
            _ => Err(()),
        }
    }
}

/// Cache-busting value appended to font asset URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nonce {
    /// Caller-supplied, reused verbatim.
    Fixed(String),
    /// A new value per call; the output must not be cached.
    Random,
}

impl Nonce {
    pub fn parse(value: &str) -> Self {
        if value == RANDOM_NONCE {
            Nonce::Random
        } else {
            Nonce::Fixed(value.to_string())
        }
    }

    /// The concrete value to inject for one call.
    pub fn resolve(&self) -> String {
        match self {
            Nonce::Fixed(value) => value.clone(),
            Nonce::Random => format!("{:016x}", fastrand::u64(..)),
        }
    }

    pub fn is_random(&self) -> bool {
        matches!(self, Nonce::Random)
    }
}

/// Recognized query options for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOptions {
    pub family: Option<String>,
    pub display: Option<FontDisplay>,
    pub merge: bool,
    pub cssvar: Option<String>,
    pub minify: bool,
    pub nonce: Option<Nonce>,
}

impl TransformOptions {
    /// Parse a raw (still percent-encoded) query string.
    ///
    /// `merge` and `minify` are presence flags. For repeated keys the first
    /// occurrence wins.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut options = Self::default();
        let Some(query) = query else {
            return options;
        };

        // A repeated key is ignored even when its first value was rejected.
        let mut seen = HashSet::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if !seen.insert(key.clone()) {
                continue;
            }
            match key.as_ref() {
                "family" => options.family = Some(value.into_owned()),
                "display" => options.display = value.parse().ok(),
                "merge" => options.merge = true,
                "cssvar" if !value.is_empty() => options.cssvar = Some(value.into_owned()),
                "minify" => options.minify = true,
                "nonce" => options.nonce = Some(Nonce::parse(&value)),
                _ => {}
            }
        }

        options
    }

    /// Whether the stylesheet built from these options may be cached.
    pub fn is_cacheable(&self) -> bool {
        !self.nonce.as_ref().is_some_and(Nonce::is_random)
    }
}
