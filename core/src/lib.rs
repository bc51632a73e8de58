//! Recursive, separator-aware text chunking.
//!
//! The [`RecursiveSplitter`] cuts text into chunks of at most `chunk_size`
//! characters, preferring high-priority boundaries (paragraphs, then lines,
//! then words) and only falling back to finer ones for pieces that are still
//! too long:
//!
//! ```rust
//! use recsplit_core::{ChunkingConfig, Language, split};
//!
//! let config = ChunkingConfig::for_language(Language::Markdown, 400, 0)?;
//! let chunks = split("# Title\n\nSome text.\n\n## Section\n\nMore.", &config)?;
//! assert_eq!(chunks.len(), 1);
//! # Ok::<(), recsplit_core::SplitError>(())
//! ```
//!
//! Separator lists are plain data ([`SeparatorSet`]); [`Language`] only names
//! the built-in presets, so a new syntax needs nothing more than a new list.

pub mod config;
pub mod error;
pub mod separators;
pub mod splitter;
pub mod types;

pub use config::{ChunkingConfig, ChunkingConfigBuilder, KeepSeparator};
pub use error::{Result, SplitError};
pub use separators::{Language, SeparatorSet};
pub use splitter::{CharacterSplitter, RecursiveSplitter, TextSplitter, split};
pub use types::{CHUNK_INDEX_KEY, Chunk, Document, Metadata, START_INDEX_KEY};
