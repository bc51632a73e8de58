use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading documents.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read from the filesystem.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The input bytes do not decode as a valid PDF structure.
    #[error("failed to parse PDF: {0}")]
    Parse(String),
    /// A text file is not valid UTF-8.
    #[error("{path} is not valid UTF-8")]
    Encoding {
        /// Offending file.
        path: PathBuf,
    },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, LoadError>;
