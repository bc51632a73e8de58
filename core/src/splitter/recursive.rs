//! Recursive, separator-priority text splitting.

use std::ops::Range;

use tracing::{debug, trace};

use crate::config::ChunkingConfig;
use crate::error::Result;
use crate::types::Chunk;

use super::TextSplitter;
use super::merge::{Merger, char_len, hard_cut, into_chunks, split_pieces};

/// Splits text on the highest-priority separator that occurs, recursing into
/// pieces that are still too long with the remaining separators.
///
/// # Example
///
/// ```rust
/// use recsplit_core::{ChunkingConfig, RecursiveSplitter, SeparatorSet, TextSplitter};
///
/// let config = ChunkingConfig::builder()
///     .chunk_size(4)
///     .chunk_overlap(2)
///     .separators(SeparatorSet::new([""]))
///     .build()
///     .unwrap();
/// let splitter = RecursiveSplitter::new(config).unwrap();
/// let chunks = splitter.split_text("abcdefghij").unwrap();
/// assert_eq!(chunks, ["abcd", "cdef", "efgh", "ghij"]);
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveSplitter {
    config: ChunkingConfig,
}

impl RecursiveSplitter {
    /// Creates a splitter after validating `config`.
    ///
    /// # Errors
    /// Returns [`SplitError::InvalidConfiguration`](crate::SplitError::InvalidConfiguration)
    /// if `config` violates its invariants.
    pub fn new(config: ChunkingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this splitter runs with.
    #[must_use]
    pub const fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    fn ranges(&self, text: &str) -> Vec<Range<usize>> {
        let mut out = Vec::new();
        if text.is_empty() {
            return out;
        }

        let config = &self.config;
        if char_len(text) <= config.chunk_size {
            let mut merger = Merger::new(text, config.chunk_size, 0, config.strip_whitespace);
            merger.emit_whole(0..text.len(), &mut out);
            return out;
        }

        self.split_range(text, 0..text.len(), config.separators.as_slice(), &mut out);
        out
    }

    fn split_range(
        &self,
        text: &str,
        range: Range<usize>,
        separators: &[String],
        out: &mut Vec<Range<usize>>,
    ) {
        let config = &self.config;
        let slice = &text[range.clone()];

        let Some(position) = separators
            .iter()
            .position(|sep| sep.is_empty() || slice.contains(sep.as_str()))
            .or_else(|| separators.len().checked_sub(1))
        else {
            trace!(len = slice.len(), "separators exhausted, cutting by size");
            out.extend(hard_cut(text, range, config.chunk_size));
            return;
        };
        let separator = separators[position].as_str();
        let rest = &separators[position + 1..];
        debug!(
            separator = ?separator,
            level = position,
            bytes = slice.len(),
            "splitting range"
        );

        let mut merger = Merger::new(
            text,
            config.chunk_size,
            config.chunk_overlap,
            config.strip_whitespace,
        );
        for piece in split_pieces(text, range, separator, config.keep_separator) {
            if char_len(&text[piece.clone()]) > config.chunk_size {
                merger.flush(out);
                merger.reset_overlap();
                self.split_range(text, piece, rest, out);
            } else {
                merger.push(piece, out);
            }
        }
        merger.flush(out);
    }
}

impl TextSplitter for RecursiveSplitter {
    fn split_chunks(&self, text: &str) -> Result<Vec<Chunk>> {
        Ok(into_chunks(text, self.ranges(text)))
    }

    fn name(&self) -> &'static str {
        "recursive"
    }
}

/// Splits `text` with `config`, returning chunks in source order.
///
/// The configuration is validated before any work, so an invalid config fails
/// even for empty input.
///
/// # Errors
/// Returns [`SplitError::InvalidConfiguration`](crate::SplitError::InvalidConfiguration)
/// if `config` violates its invariants.
pub fn split(text: &str, config: &ChunkingConfig) -> Result<Vec<String>> {
    RecursiveSplitter::new(config.clone())?.split_text(text)
}
