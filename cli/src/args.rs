use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use recsplit_core::{KeepSeparator, Language};

/// Load documents and split them into chunks.
#[derive(Debug, Parser)]
#[command(name = "recsplit", version, about)]
pub struct Cli {
    /// What to split.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the `recsplit` binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split every page of a PDF with a single-separator character splitter.
    Pdf {
        /// PDF file to load.
        path: PathBuf,
        /// Separator to cut on. Defaults to empty, which cuts between any two characters.
        #[arg(long)]
        separator: Option<String>,
        /// Inclusive 1-based page range such as `2-5`.
        #[arg(long, value_parser = parse_page_range)]
        pages: Option<std::ops::RangeInclusive<usize>>,
        #[command(flatten)]
        chunking: ChunkArgs,
    },
    /// Split a Markdown file with the Markdown separator preset.
    Markdown {
        /// Markdown file to load.
        path: PathBuf,
        #[command(flatten)]
        chunking: ChunkArgs,
    },
    /// Split source code with a language preset.
    ///
    /// Without `--file`, a built-in Python sample is split.
    Code {
        /// Source file to split instead of the built-in sample.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Language preset to use.
        #[arg(long, default_value_t = Language::Python)]
        language: Language,
        #[command(flatten)]
        chunking: ChunkArgs,
    },
    /// Split any text, Markdown, or PDF file with a fully configurable recursive splitter.
    Split {
        /// File to load; `.pdf` files are loaded page by page.
        path: PathBuf,
        /// Language preset to take separators from.
        #[arg(long, conflicts_with = "separators")]
        language: Option<Language>,
        /// Separator, highest priority first; repeat the flag for more. The
        /// list must end with an empty separator.
        #[arg(long = "separator")]
        separators: Vec<String>,
        /// Where matched separators end up.
        #[arg(long, value_enum)]
        keep_separator: Option<KeepArg>,
        /// Trim whitespace around every chunk.
        #[arg(long)]
        strip_whitespace: bool,
        /// JSON file holding a chunking configuration; flags override it.
        #[arg(long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        chunking: ChunkArgs,
    },
}

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct ChunkArgs {
    /// Maximum characters per chunk.
    #[arg(long)]
    pub chunk_size: Option<usize>,
    /// Characters repeated from the end of one chunk at the start of the next.
    #[arg(long)]
    pub chunk_overlap: Option<usize>,
    /// Index of the chunk to print.
    #[arg(long)]
    pub show: Option<usize>,
    /// Print every chunk with its metadata as JSON instead.
    #[arg(long)]
    pub json: bool,
}

/// Command-line spelling of [`KeepSeparator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeepArg {
    /// Drop separators.
    Discard,
    /// Keep separators at the start of the following chunk.
    Start,
    /// Keep separators at the end of the preceding chunk.
    End,
}

impl From<KeepArg> for KeepSeparator {
    fn from(keep: KeepArg) -> Self {
        match keep {
            KeepArg::Discard => Self::Discard,
            KeepArg::Start => Self::Start,
            KeepArg::End => Self::End,
        }
    }
}

fn parse_page_range(value: &str) -> Result<std::ops::RangeInclusive<usize>, String> {
    let parse = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid page number {s:?}: {e}"))
    };
    let (start, end) = match value.split_once('-') {
        Some((start, end)) => (parse(start)?, parse(end)?),
        None => {
            let page = parse(value)?;
            (page, page)
        }
    };
    if start == 0 || end < start {
        return Err(format!("invalid page range {value:?}"));
    }
    Ok(start..=end)
}
