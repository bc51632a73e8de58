use std::path::{Path, PathBuf};

use recsplit_core::{Document, Metadata};
use tracing::debug;

use crate::error::{LoadError, Result};
use crate::{Loader, SOURCE_KEY};

/// Loads a whole text or Markdown file as one document.
#[derive(Debug, Clone)]
pub struct TextLoader {
    path: PathBuf,
}

impl TextLoader {
    /// Build a loader for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Loader for TextLoader {
    fn load(&self) -> Result<Vec<Document>> {
        let bytes = std::fs::read(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| LoadError::Encoding {
            path: self.path.clone(),
        })?;
        debug!(path = %self.path.display(), chars = text.chars().count(), "loaded text file");

        let mut metadata = Metadata::new();
        metadata.insert(SOURCE_KEY.into(), self.path.display().to_string());
        Ok(vec![Document::with_metadata(text, metadata)])
    }
}
