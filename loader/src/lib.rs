//! Document loaders for recsplit.
//!
//! Loaders turn a source (a PDF or a text/Markdown file) into
//! [`Document`]s ready for a [`TextSplitter`](recsplit_core::TextSplitter).
//! Splitters never see load failures: those surface as [`LoadError`].

mod error;
mod pdf;
mod text;

pub use error::{LoadError, Result};
pub use pdf::{PdfLoader, TOTAL_PAGES_KEY};
pub use text::TextLoader;

use std::path::Path;

use recsplit_core::Document;

/// Metadata key holding the path (or `memory`) a document was loaded from.
pub const SOURCE_KEY: &str = "source";

/// Metadata key holding the 0-based page number of a PDF page.
pub const PAGE_KEY: &str = "page";

/// Anything that can produce an ordered list of documents.
pub trait Loader {
    /// Loads the source.
    ///
    /// # Errors
    /// Returns a [`LoadError`] when the source is missing or unreadable.
    fn load(&self) -> Result<Vec<Document>>;
}

/// Loads `path`, picking the PDF loader for `.pdf` files and the text loader otherwise.
///
/// # Errors
/// Returns a [`LoadError`] when the file is missing or cannot be decoded.
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        PdfLoader::from_path(path).load()
    } else {
        TextLoader::new(path).load()
    }
}
