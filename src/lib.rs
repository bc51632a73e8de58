//! # recsplit
//!
//! Façade crate that re-exports [`recsplit_core`] and, with the default
//! `loader` feature, the PDF and text loaders from `recsplit_loader`.
//!
//! ## Example
//!
//! ```rust
//! use recsplit::{ChunkingConfig, Language, RecursiveSplitter, TextSplitter};
//!
//! let config = ChunkingConfig::for_language(Language::Python, 100, 0)?;
//! let splitter = RecursiveSplitter::new(config)?;
//! let chunks = splitter.split_text("class A:\n    x = 1\n\ndef f():\n    return 2\n")?;
//! assert_eq!(chunks.len(), 1);
//! # Ok::<(), recsplit::SplitError>(())
//! ```
//!
//! ## Modules
//!
//! - [`recsplit_core::splitter`]: the recursive and character splitters.
//! - [`recsplit_core::separators`]: separator lists and language presets.
//! - [`loader`]: documents from PDF and text files (feature `loader`).

pub use recsplit_core::*;

/// Document loaders.
#[cfg(feature = "loader")]
pub mod loader {
    pub use recsplit_loader::*;
}
