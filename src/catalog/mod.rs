//! Font catalog subsystem.
//!
//! # Data Flow
//! ```text
//! fonts.json (written by the offline catalog generator)
//!     → FontCatalog::load (read + parse, every request)
//!     → priority::select (rank, drop excluded, stable sort)
//!     → css::combine (build the aggregate stylesheet)
//! ```
//!
//! # Design Decisions
//! - The file is re-read per request so a regenerated catalog is served
//!   without a restart; it is small and the read is async
//! - A missing or malformed file is a deployment defect and surfaces as a
//!   server error, never as a client error

pub mod font;
pub mod priority;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use font::FontFace;
pub use priority::{select, PriorityTier, DEFAULT_FAMILY};

/// Errors raised while loading the catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Handle to the static catalog file.
#[derive(Debug, Clone)]
pub struct FontCatalog {
    path: PathBuf,
}

impl FontCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the catalog in file order.
    pub async fn load(&self) -> Result<Vec<FontFace>, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;

        let fonts: Vec<FontFace> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = ?self.path, families = fonts.len(), "Catalog loaded");
        Ok(fonts)
    }

    /// Load the catalog and apply [`select`].
    pub async fn load_selected(&self) -> Result<Vec<FontFace>, CatalogError> {
        Ok(select(self.load().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_ignores_extra_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"family":"Noto Sans","styles":"@font-face {{}}","category":"Sans Serif","isNoto":true}}]"#
        )
        .unwrap();

        let fonts = FontCatalog::new(file.path()).load().await.unwrap();
        assert_eq!(fonts, vec![FontFace::new("Noto Sans", "@font-face {}")]);
    }

    #[tokio::test]
    async fn test_load_selected_orders() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"family":"Noto Sans SC","styles":""}},{{"family":"Roboto","styles":""}},{{"family":"Noto Sans","styles":""}}]"#
        )
        .unwrap();

        let fonts = FontCatalog::new(file.path()).load_selected().await.unwrap();
        let families: Vec<_> = fonts.iter().map(|f| f.family.as_str()).collect();
        assert_eq!(families, ["Noto Sans", "Noto Sans SC"]);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = FontCatalog::new("/nonexistent/fonts.json").load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = FontCatalog::new(file.path()).load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().starts_with("malformed catalog"));
    }
}
