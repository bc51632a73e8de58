//! Configuration for splitters.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SplitError};
use crate::separators::{Language, SeparatorSet};

/// Where a matched separator ends up after splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeepSeparator {
    /// Drop the separator; it reappears only between pieces merged into the same chunk.
    Discard,
    /// Attach the separator to the start of the following piece.
    Start,
    /// Attach the separator to the end of the preceding piece.
    #[default]
    End,
}

/// Configuration for a [`RecursiveSplitter`](crate::RecursiveSplitter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Maximum characters per chunk.
    pub chunk_size: usize,
    /// Characters repeated from the end of one chunk at the start of the next.
    pub chunk_overlap: usize,
    /// Boundaries to try, highest priority first.
    pub separators: SeparatorSet,
    /// Placement of matched separators.
    pub keep_separator: KeepSeparator,
    /// Trim whitespace around every emitted chunk and drop blank ones.
    pub strip_whitespace: bool,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 4000,
            chunk_overlap: 200,
            separators: SeparatorSet::default(),
            keep_separator: KeepSeparator::End,
            strip_whitespace: false,
        }
    }
}

impl ChunkingConfig {
    /// Creates a validated configuration with the prose separators.
    ///
    /// # Errors
    /// Returns [`SplitError::InvalidConfiguration`] if the sizes are inconsistent.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        Self::builder()
            .chunk_size(chunk_size)
            .chunk_overlap(chunk_overlap)
            .build()
    }

    /// Creates a validated configuration using the preset for `language`.
    ///
    /// Language presets keep separators at the start of the following piece
    /// and strip whitespace, so a `"\ndef "` boundary opens the next chunk.
    ///
    /// # Errors
    /// Returns [`SplitError::InvalidConfiguration`] if the sizes are inconsistent.
    pub fn for_language(
        language: Language,
        chunk_size: usize,
        chunk_overlap: usize,
    ) -> Result<Self> {
        Self::builder()
            .chunk_size(chunk_size)
            .chunk_overlap(chunk_overlap)
            .separators(language.separators())
            .keep_separator(KeepSeparator::Start)
            .strip_whitespace(true)
            .build()
    }

    /// Creates a builder for custom configuration.
    #[must_use]
    pub fn builder() -> ChunkingConfigBuilder {
        ChunkingConfigBuilder::new()
    }

    /// Checks every invariant the recursive splitter relies on.
    ///
    /// # Errors
    /// Returns [`SplitError::InvalidConfiguration`] when `chunk_size` is zero,
    /// `chunk_overlap >= chunk_size`, the separator list is empty, or the
    /// list does not end with the `""` fallback.
    pub fn validate(&self) -> Result<()> {
        validate_sizes(self.chunk_size, self.chunk_overlap)?;
        if self.separators.is_empty() {
            return Err(SplitError::InvalidConfiguration(
                "separator list must not be empty".into(),
            ));
        }
        if !self.separators.ends_with_fallback() {
            return Err(SplitError::InvalidConfiguration(
                "separator list must end with the empty-string fallback".into(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn validate_sizes(chunk_size: usize, chunk_overlap: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(SplitError::InvalidConfiguration(
            "chunk_size must be positive".into(),
        ));
    }
    if chunk_overlap >= chunk_size {
        return Err(SplitError::InvalidConfiguration(format!(
            "chunk_overlap ({chunk_overlap}) must be less than chunk_size ({chunk_size})"
        )));
    }
    Ok(())
}

/// Builder for [`ChunkingConfig`].
#[derive(Debug, Default)]
pub struct ChunkingConfigBuilder {
    config: ChunkingConfig,
}

impl ChunkingConfigBuilder {
    /// Creates a builder holding the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ChunkingConfig::default(),
        }
    }

    /// Sets the maximum chunk size in characters.
    #[must_use]
    pub const fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Sets the overlap between consecutive chunks.
    #[must_use]
    pub const fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.config.chunk_overlap = overlap;
        self
    }

    /// Sets the separator list.
    #[must_use]
    pub fn separators(mut self, separators: impl Into<SeparatorSet>) -> Self {
        self.config.separators = separators.into();
        self
    }

    /// Uses the preset separators for `language`.
    #[must_use]
    pub fn language(self, language: Language) -> Self {
        self.separators(language.separators())
    }

    /// Sets the separator placement policy.
    #[must_use]
    pub const fn keep_separator(mut self, keep: KeepSeparator) -> Self {
        self.config.keep_separator = keep;
        self
    }

    /// Enables or disables whitespace stripping of emitted chunks.
    #[must_use]
    pub const fn strip_whitespace(mut self, enabled: bool) -> Self {
        self.config.strip_whitespace = enabled;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    /// See [`ChunkingConfig::validate`].
    pub fn build(self) -> Result<ChunkingConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ChunkingConfig::default();
        assert_eq!(config.chunk_size, 4000);
        assert_eq!(config.chunk_overlap, 200);
        assert_eq!(config.keep_separator, KeepSeparator::End);
        assert!(!config.strip_whitespace);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_config() {
        let config = ChunkingConfig::builder()
            .chunk_size(400)
            .chunk_overlap(0)
            .language(Language::Markdown)
            .keep_separator(KeepSeparator::Discard)
            .strip_whitespace(true)
            .build()
            .unwrap();

        assert_eq!(config.chunk_size, 400);
        assert_eq!(config.chunk_overlap, 0);
        assert_eq!(config.separators, Language::Markdown.separators());
        assert_eq!(config.keep_separator, KeepSeparator::Discard);
        assert!(config.strip_whitespace);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let err = ChunkingConfig::new(0, 0).unwrap_err();
        assert!(matches!(err, SplitError::InvalidConfiguration(_)));
    }

    #[test]
    fn overlap_equal_to_size_is_rejected() {
        let err = ChunkingConfig::new(10, 10).unwrap_err();
        assert!(err.to_string().contains("chunk_overlap (10)"));
    }

    #[test]
    fn empty_separator_list_is_rejected() {
        let err = ChunkingConfig::builder()
            .chunk_size(10)
            .chunk_overlap(0)
            .separators(SeparatorSet::new(Vec::<String>::new()))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn missing_fallback_is_rejected() {
        let err = ChunkingConfig::builder()
            .chunk_size(10)
            .chunk_overlap(0)
            .separators(SeparatorSet::new(["\n\n", " "]))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("fallback"));
    }

    #[test]
    fn language_config_keeps_separator_at_start() {
        let config = ChunkingConfig::for_language(Language::Python, 310, 0).unwrap();
        assert_eq!(config.keep_separator, KeepSeparator::Start);
        assert!(config.strip_whitespace);
    }

    #[test]
    fn deserializes_partial_json() {
        let config: ChunkingConfig =
            serde_json::from_str(r#"{"chunk_size": 9, "chunk_overlap": 0, "separators": [" ", ""]}"#)
                .unwrap();
        assert_eq!(config.chunk_size, 9);
        assert_eq!(config.separators, SeparatorSet::new([" ", ""]));
        assert_eq!(config.keep_separator, KeepSeparator::End);
        assert!(config.validate().is_ok());
    }
}
