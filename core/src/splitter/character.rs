//! Single-separator text splitting.

use std::ops::Range;

use tracing::warn;

use crate::config::{KeepSeparator, validate_sizes};
use crate::error::Result;
use crate::types::Chunk;

use super::TextSplitter;
use super::merge::{Merger, char_len, into_chunks, split_pieces};

/// Splits text on one separator and greedily merges the pieces.
///
/// Unlike [`RecursiveSplitter`](super::RecursiveSplitter) there is no
/// fallback: a piece longer than `chunk_size` becomes a chunk of its own.
/// An empty separator splits between every character.
///
/// # Example
///
/// ```rust
/// use recsplit_core::{CharacterSplitter, TextSplitter};
///
/// let splitter = CharacterSplitter::new("", 4, 0).unwrap();
/// let chunks = splitter.split_text("abcdefghij").unwrap();
/// assert_eq!(chunks, ["abcd", "efgh", "ij"]);
/// ```
#[derive(Debug, Clone)]
pub struct CharacterSplitter {
    separator: String,
    chunk_size: usize,
    chunk_overlap: usize,
    keep_separator: KeepSeparator,
    strip_whitespace: bool,
}

impl CharacterSplitter {
    /// Creates a character splitter.
    ///
    /// Separators are discarded and chunks are whitespace-trimmed unless
    /// changed with [`with_keep_separator`](Self::with_keep_separator) and
    /// [`with_strip_whitespace`](Self::with_strip_whitespace).
    ///
    /// # Errors
    /// Returns [`SplitError::InvalidConfiguration`](crate::SplitError::InvalidConfiguration)
    /// if `chunk_size` is zero or `chunk_overlap >= chunk_size`.
    pub fn new(separator: impl Into<String>, chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        validate_sizes(chunk_size, chunk_overlap)?;
        Ok(Self {
            separator: separator.into(),
            chunk_size,
            chunk_overlap,
            keep_separator: KeepSeparator::Discard,
            strip_whitespace: true,
        })
    }

    /// Sets the separator placement policy.
    #[must_use]
    pub const fn with_keep_separator(mut self, keep: KeepSeparator) -> Self {
        self.keep_separator = keep;
        self
    }

    /// Enables or disables whitespace stripping of emitted chunks.
    #[must_use]
    pub const fn with_strip_whitespace(mut self, enabled: bool) -> Self {
        self.strip_whitespace = enabled;
        self
    }

    /// The separator this splitter cuts on.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    fn ranges(&self, text: &str) -> Vec<Range<usize>> {
        let mut out = Vec::new();
        if text.is_empty() {
            return out;
        }

        let mut merger = Merger::new(
            text,
            self.chunk_size,
            self.chunk_overlap,
            self.strip_whitespace,
        );
        for piece in split_pieces(text, 0..text.len(), &self.separator, self.keep_separator) {
            let len = char_len(&text[piece.clone()]);
            if len > self.chunk_size {
                warn!(
                    len,
                    chunk_size = self.chunk_size,
                    "created a chunk longer than the configured size"
                );
                merger.emit_whole(piece, &mut out);
            } else {
                merger.push(piece, &mut out);
            }
        }
        merger.flush(&mut out);
        out
    }
}

impl TextSplitter for CharacterSplitter {
    fn split_chunks(&self, text: &str) -> Result<Vec<Chunk>> {
        Ok(into_chunks(text, self.ranges(text)))
    }

    fn name(&self) -> &'static str {
        "character"
    }
}
