use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use recsplit_core::{
    CharacterSplitter, ChunkingConfig, Document, KeepSeparator, Language, RecursiveSplitter,
    SeparatorSet, TextSplitter,
};
use recsplit_loader::{Loader, PdfLoader, TextLoader, load_path};
use tracing::info;

use crate::args::{ChunkArgs, Cli, Command, KeepArg};

/// Python snippet split by `recsplit code` when no file is given.
pub const PYTHON_SAMPLE: &str = concat!(
    "\n",
    "class A:\n",
    "    def __init__(self):\n",
    "        self.a = 1\n",
    "        self.b = 2\n",
    "        self.c = 3\n",
    "        \n",
    "    def get_a(self):\n",
    "        return self.a\n",
    "\n",
    "    def get_b(self):\n",
    "        return self.b\n",
    "\n",
    "    def get_c(self):\n",
    "        return self.c\n",
    "        \n",
    "obj = A()\n",
    "print(obj.get_a())\n",
    "print(obj.get_b())\n",
    "print(obj.get_c())\n",
    "        \n",
);

/// Chunk size, overlap and displayed chunk used when the flags are absent.
struct Defaults {
    chunk_size: usize,
    chunk_overlap: usize,
    show: usize,
}

const PDF_DEFAULTS: Defaults = Defaults {
    chunk_size: 200,
    chunk_overlap: 0,
    show: 0,
};

const MARKDOWN_DEFAULTS: Defaults = Defaults {
    chunk_size: 400,
    chunk_overlap: 0,
    show: 2,
};

const CODE_DEFAULTS: Defaults = Defaults {
    chunk_size: 310,
    chunk_overlap: 0,
    show: 1,
};

/// Runs a parsed command line, writing the report to `out`.
///
/// # Errors
/// Fails when the input cannot be loaded, the configuration is invalid, or
/// `out` cannot be written.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Pdf {
            path,
            separator,
            pages,
            chunking,
        } => {
            let (size, overlap) = chunking.sizes(&PDF_DEFAULTS);
            let separator = separator.clone().unwrap_or_default();
            let splitter = CharacterSplitter::new(separator, size, overlap)
                .context("invalid chunking options")?;
            let mut loader = PdfLoader::from_path(path);
            if let Some(pages) = pages {
                loader = loader.with_page_range(pages.clone());
            }
            let docs = loader
                .load()
                .with_context(|| format!("failed to load {}", path.display()))?;
            report(&splitter, &docs, chunking, PDF_DEFAULTS.show, out)
        }
        Command::Markdown { path, chunking } => {
            let (size, overlap) = chunking.sizes(&MARKDOWN_DEFAULTS);
            let config = ChunkingConfig::for_language(Language::Markdown, size, overlap)
                .context("invalid chunking options")?;
            let docs = TextLoader::new(path)
                .load()
                .with_context(|| format!("failed to load {}", path.display()))?;
            report(
                &RecursiveSplitter::new(config)?,
                &docs,
                chunking,
                MARKDOWN_DEFAULTS.show,
                out,
            )
        }
        Command::Code {
            file,
            language,
            chunking,
        } => {
            let (size, overlap) = chunking.sizes(&CODE_DEFAULTS);
            let config = ChunkingConfig::for_language(*language, size, overlap)
                .context("invalid chunking options")?;
            let docs = match file {
                Some(path) => TextLoader::new(path)
                    .load()
                    .with_context(|| format!("failed to load {}", path.display()))?,
                None => vec![Document::new(PYTHON_SAMPLE)],
            };
            report(
                &RecursiveSplitter::new(config)?,
                &docs,
                chunking,
                CODE_DEFAULTS.show,
                out,
            )
        }
        Command::Split {
            path,
            language,
            separators,
            keep_separator,
            strip_whitespace,
            config,
            chunking,
        } => {
            let config = split_config(
                config.as_deref(),
                *language,
                separators,
                *keep_separator,
                *strip_whitespace,
                chunking,
            )?;
            let docs =
                load_path(path).with_context(|| format!("failed to load {}", path.display()))?;
            report(&RecursiveSplitter::new(config)?, &docs, chunking, 0, out)
        }
    }
}

impl ChunkArgs {
    fn sizes(&self, defaults: &Defaults) -> (usize, usize) {
        (
            self.chunk_size.unwrap_or(defaults.chunk_size),
            self.chunk_overlap.unwrap_or(defaults.chunk_overlap),
        )
    }
}

fn split_config(
    file: Option<&Path>,
    language: Option<Language>,
    separators: &[String],
    keep: Option<KeepArg>,
    strip_whitespace: bool,
    chunking: &ChunkArgs,
) -> Result<ChunkingConfig> {
    let mut config = match file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => ChunkingConfig::default(),
    };

    if let Some(language) = language {
        config.separators = language.separators();
    }
    if !separators.is_empty() {
        config.separators = SeparatorSet::new(separators.iter().cloned());
    }
    if let Some(keep) = keep {
        config.keep_separator = KeepSeparator::from(keep);
    }
    if strip_whitespace {
        config.strip_whitespace = true;
    }
    if let Some(size) = chunking.chunk_size {
        config.chunk_size = size;
    }
    if let Some(overlap) = chunking.chunk_overlap {
        config.chunk_overlap = overlap;
    }

    config.validate().context("invalid chunking options")?;
    Ok(config)
}

fn report(
    splitter: &dyn TextSplitter,
    docs: &[Document],
    chunking: &ChunkArgs,
    default_show: usize,
    out: &mut dyn Write,
) -> Result<()> {
    info!(documents = docs.len(), splitter = splitter.name(), "splitting");
    let chunks = splitter.split_documents(docs)?;
    info!(chunks = chunks.len(), "split complete");

    if chunking.json {
        serde_json::to_writer_pretty(&mut *out, &chunks)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", chunks.len())?;
    let show = chunking.show.unwrap_or(default_show);
    match chunks.get(show) {
        Some(chunk) => writeln!(out, "{}", chunk.text)?,
        None => writeln!(out, "no chunk {show}: only {} chunks", chunks.len())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn code_sample_splits_into_two_chunks() {
        let output = run_args(&["recsplit", "code"]).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("2"));
        assert_eq!(lines.next(), Some("def get_c(self):"));
        assert!(output.trim_end().ends_with("print(obj.get_c())"));
    }

    #[test]
    fn missing_sample_index_is_reported() {
        let output = run_args(&["recsplit", "code", "--show", "9"]).unwrap();
        assert!(output.contains("no chunk 9: only 2 chunks"));
    }

    #[test]
    fn invalid_overlap_fails() {
        let err = run_args(&["recsplit", "code", "--chunk-size", "10", "--chunk-overlap", "10"])
            .unwrap_err();
        assert!(format!("{err:#}").contains("invalid configuration"));
    }

    #[test]
    fn markdown_third_chunk_is_shown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        let section = "Some words in a paragraph. ".repeat(10);
        let body = format!("# One\n\n{section}\n\n# Two\n\n{section}\n\n# Three\n\n{section}\n");
        std::fs::write(&path, body).unwrap();

        let output = run_args(&["recsplit", "markdown", path.to_str().unwrap()]).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("3"));
        assert_eq!(lines.next(), Some("# Three"));
    }

    #[test]
    fn split_reads_json_config_and_prints_json() {
        let dir = tempfile::tempdir().unwrap();
        let text = dir.path().join("words.txt");
        std::fs::write(&text, "aaaa bbbb cccc").unwrap();
        let config = dir.path().join("config.json");
        std::fs::write(
            &config,
            r#"{"chunk_size": 9, "chunk_overlap": 0, "separators": [" ", ""]}"#,
        )
        .unwrap();

        let output = run_args(&[
            "recsplit",
            "split",
            text.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--json",
        ])
        .unwrap();
        let docs: Vec<Document> = serde_json::from_str(&output).unwrap();
        let texts: Vec<&str> = docs.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, ["aaaa ", "bbbb cccc"]);
        assert_eq!(docs[1].meta("start_index"), Some("5"));
    }

    #[test]
    fn split_requires_trailing_fallback_separator() {
        let dir = tempfile::tempdir().unwrap();
        let text = dir.path().join("words.txt");
        std::fs::write(&text, "aaaa bbbb").unwrap();

        let result = run_args(&[
            "recsplit",
            "split",
            text.to_str().unwrap(),
            "--separator",
            " ",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_pdf_reports_path() {
        let err = run_args(&["recsplit", "pdf", "/no/such/report.pdf"]).unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/report.pdf"));
    }
}
