pub mod pdftotext;

use crate::error::MarkbookError;
use crate::model::RawRow;

/// Content decoded from a single page of a PDF.
///
/// An empty page is valid content (empty text, no tables), not an
/// error; decoding errors are document-scoped.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
    pub tables: Vec<Vec<RawRow>>,
}

/// Trait for PDF page decoding backends.
pub trait PageDecoder: Send + Sync {
    /// Decode PDF bytes into per-page text and table rows.
    fn decode_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, MarkbookError>;

    /// Name of this decoding backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
