//! Core types shared by splitters and loaders.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key/value metadata attached to documents.
pub type Metadata = BTreeMap<String, String>;

/// Metadata key holding the position of a chunk within its parent document.
pub const CHUNK_INDEX_KEY: &str = "chunk_index";

/// Metadata key holding the character offset of a chunk in its parent document.
pub const START_INDEX_KEY: &str = "start_index";

/// A unit of text plus metadata, as produced by a loader.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Raw text content.
    pub text: String,
    /// Arbitrary metadata (source path, page number, ...).
    pub metadata: Metadata,
}

impl Document {
    /// Creates a new document with empty metadata.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: Metadata::new(),
        }
    }

    /// Creates a new document with metadata.
    #[must_use]
    pub fn with_metadata(text: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            text: text.into(),
            metadata,
        }
    }

    /// Returns the metadata value stored under `key`.
    #[must_use]
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

/// A chunk of text cut from a larger string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Position of this chunk in the output sequence.
    pub index: usize,
    /// Text content of the chunk.
    pub text: String,
    /// Offset of the first character of the chunk in the source, counted in `char`s.
    pub start: usize,
    /// Number of leading characters repeated from the previous chunk.
    pub overlap: usize,
}

impl Chunk {
    /// Length of the chunk in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// The part of the chunk that was not already covered by the previous chunk.
    #[must_use]
    pub fn fresh_text(&self) -> &str {
        self.text
            .char_indices()
            .nth(self.overlap)
            .map_or("", |(byte, _)| &self.text[byte..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_metadata_lookup() {
        let mut metadata = Metadata::new();
        metadata.insert("source".into(), "report.pdf".into());
        let doc = Document::with_metadata("text", metadata);

        assert_eq!(doc.meta("source"), Some("report.pdf"));
        assert_eq!(doc.meta("page"), None);
    }

    #[test]
    fn fresh_text_skips_overlap_by_chars() {
        let chunk = Chunk {
            index: 1,
            text: "héllo".into(),
            start: 3,
            overlap: 2,
        };
        assert_eq!(chunk.fresh_text(), "llo");
        assert_eq!(chunk.char_len(), 5);
    }

    #[test]
    fn fresh_text_of_fully_overlapped_chunk_is_empty() {
        let chunk = Chunk {
            index: 0,
            text: "ab".into(),
            start: 0,
            overlap: 2,
        };
        assert_eq!(chunk.fresh_text(), "");
    }
}
