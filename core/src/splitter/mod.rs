//! Text splitting strategies.
//!
//! This module provides the [`TextSplitter`] trait and its implementations:
//!
//! - [`RecursiveSplitter`]: walks a prioritized [`SeparatorSet`](crate::SeparatorSet),
//!   falling back to finer separators only for pieces that are still too long
//! - [`CharacterSplitter`]: cuts on a single separator, no fallback

mod character;
mod merge;
mod recursive;

pub use character::CharacterSplitter;
pub use recursive::{RecursiveSplitter, split};

use crate::error::Result;
use crate::types::{CHUNK_INDEX_KEY, Chunk, Document, START_INDEX_KEY};

/// Common interface of all splitters.
///
/// Implementations hold only immutable configuration, so one splitter can be
/// shared across threads.
pub trait TextSplitter: Send + Sync {
    /// Splits `text` into positioned chunks, in source order.
    ///
    /// # Errors
    /// Implementations validate their configuration up front, so this only
    /// fails for splitters that defer validation.
    fn split_chunks(&self, text: &str) -> Result<Vec<Chunk>>;

    /// Returns the name of this splitting strategy.
    fn name(&self) -> &'static str;

    /// Splits `text` into chunk strings, in source order.
    ///
    /// # Errors
    /// See [`split_chunks`](Self::split_chunks).
    fn split_text(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .split_chunks(text)?
            .into_iter()
            .map(|chunk| chunk.text)
            .collect())
    }

    /// Splits every document, copying its metadata onto each chunk.
    ///
    /// Each output document also records `chunk_index` and `start_index`
    /// (character offset inside its source document).
    ///
    /// # Errors
    /// See [`split_chunks`](Self::split_chunks).
    fn split_documents(&self, documents: &[Document]) -> Result<Vec<Document>> {
        let mut out = Vec::new();
        for doc in documents {
            for chunk in self.split_chunks(&doc.text)? {
                let mut metadata = doc.metadata.clone();
                metadata.insert(CHUNK_INDEX_KEY.into(), chunk.index.to_string());
                metadata.insert(START_INDEX_KEY.into(), chunk.start.to_string());
                out.push(Document::with_metadata(chunk.text, metadata));
            }
        }
        Ok(out)
    }
}
