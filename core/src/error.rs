//! Error types for the splitter crate.

use thiserror::Error;

/// Errors that can occur while configuring or running a splitter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// The chunking configuration violates one of its invariants.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No separator preset is registered under the given tag.
    #[error("unknown language tag: {0}")]
    UnknownLanguage(String),
}

/// Result type alias for splitting operations.
pub type Result<T> = std::result::Result<T, SplitError>;
