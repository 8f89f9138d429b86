//! Catalog record types.

use serde::{Deserialize, Serialize};

/// One family from the catalog file.
///
/// `styles` holds one or more complete `@font-face` rules exactly as the
/// upstream CSS API emitted them for `family`. Extra fields written by the
/// catalog generator are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FontFace {
    pub family: String,
    pub styles: String,
}

impl FontFace {
    pub fn new(family: impl Into<String>, styles: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            styles: styles.into(),
        }
    }
}
