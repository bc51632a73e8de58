use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use lopdf::Document as PdfDocument;
use recsplit_core::{Document, Metadata};
use tracing::{debug, warn};

use crate::error::{LoadError, Result};
use crate::{Loader, PAGE_KEY, SOURCE_KEY};

/// Metadata key holding the page count of the source PDF.
pub const TOTAL_PAGES_KEY: &str = "total_pages";

/// Loads a PDF as one document per page.
///
/// Each document carries `source`, a 0-based `page`, `total_pages`, and the
/// `title`/`author` from the PDF info dictionary when present.
#[derive(Debug, Clone)]
pub struct PdfLoader {
    source: PdfSource,
    page_range: Option<RangeInclusive<usize>>,
    normalize: bool,
}

#[derive(Debug, Clone)]
enum PdfSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl PdfLoader {
    /// Build a loader from a PDF file path.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: PdfSource::Path(path.into()),
            page_range: None,
            normalize: true,
        }
    }

    /// Build a loader from PDF bytes.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            source: PdfSource::Bytes(bytes.into()),
            page_range: None,
            normalize: true,
        }
    }

    /// Only load pages inside this inclusive, 1-based range.
    #[must_use]
    pub fn with_page_range(mut self, range: RangeInclusive<usize>) -> Self {
        self.page_range = Some(range);
        self
    }

    /// Keep extracted page text verbatim instead of trimming lines and
    /// dropping blank ones.
    #[must_use]
    pub const fn raw_text(mut self) -> Self {
        self.normalize = false;
        self
    }

    /// Returns source path if available.
    #[must_use]
    pub fn source_path(&self) -> Option<&Path> {
        match &self.source {
            PdfSource::Path(path) => Some(path.as_path()),
            PdfSource::Bytes(_) => None,
        }
    }

    fn open(&self) -> Result<(PdfDocument, String)> {
        match &self.source {
            PdfSource::Path(path) => {
                let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?;
                let doc = PdfDocument::load_mem(&bytes)
                    .map_err(|e| LoadError::Parse(e.to_string()))?;
                Ok((doc, path.display().to_string()))
            }
            PdfSource::Bytes(bytes) => {
                let doc =
                    PdfDocument::load_mem(bytes).map_err(|e| LoadError::Parse(e.to_string()))?;
                Ok((doc, "memory".to_string()))
            }
        }
    }
}

impl Loader for PdfLoader {
    fn load(&self) -> Result<Vec<Document>> {
        let (pdf, source) = self.open()?;

        let mut page_numbers: Vec<u32> = pdf.get_pages().keys().copied().collect();
        page_numbers.sort_unstable();
        let total_pages = page_numbers.len();
        let info = info_metadata(&pdf);

        let selected = select_pages(&page_numbers, self.page_range.clone());
        debug!(%source, total_pages, selected = selected.len(), "extracting PDF pages");

        let mut docs = Vec::with_capacity(selected.len());
        for (page_index, page_number) in selected {
            let raw = pdf.extract_text(&[page_number]).unwrap_or_else(|e| {
                warn!(%source, page = page_index, error = %e, "page text could not be extracted");
                String::new()
            });
            let text = if self.normalize {
                normalize_text(&raw)
            } else {
                raw
            };

            let mut metadata = info.clone();
            metadata.insert(SOURCE_KEY.into(), source.clone());
            metadata.insert(PAGE_KEY.into(), page_index.to_string());
            metadata.insert(TOTAL_PAGES_KEY.into(), total_pages.to_string());
            docs.push(Document::with_metadata(text, metadata));
        }

        Ok(docs)
    }
}

/// Pairs each selected page's 0-based index with its PDF page number.
fn select_pages(pages: &[u32], range: Option<RangeInclusive<usize>>) -> Vec<(usize, u32)> {
    pages
        .iter()
        .enumerate()
        .filter(|(idx, _)| range.as_ref().is_none_or(|r| r.contains(&(idx + 1))))
        .map(|(idx, page)| (idx, *page))
        .collect()
}

fn normalize_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn info_metadata(pdf: &PdfDocument) -> Metadata {
    let mut meta = Metadata::new();
    if let Ok(info_ref) = pdf.trailer.get(b"Info")
        && let Ok(info_ref) = info_ref.as_reference()
        && let Ok(dict) = pdf.get_dictionary(info_ref)
    {
        for (key, name) in [(b"Title".as_slice(), "title"), (b"Author".as_slice(), "author")] {
            if let Some(value) = dict
                .get(key)
                .ok()
                .and_then(|v| v.as_str().ok())
                .map(to_clean_string)
                .filter(|v| !v.is_empty())
            {
                meta.insert(name.into(), value);
            }
        }
    }
    meta
}

fn to_clean_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim().to_string()
}
