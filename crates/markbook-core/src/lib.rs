pub mod aggregate;
pub mod error;
pub mod export;
pub mod extraction;
pub mod identity;
pub mod model;
pub mod rows;

use error::MarkbookError;
use extraction::PageDecoder;
use model::{BatchOutcome, DocumentFailure, ResultRecord};

/// Extract every qualifying result row from one document.
///
/// Identity is resolved per page from that page's text, then applied
/// to the rows of that page's tables. Record order follows row order
/// within a table, tables and pages in document order.
pub fn extract_document(
    pdf_bytes: &[u8],
    decoder: &dyn PageDecoder,
    source_file: &str,
) -> Result<Vec<ResultRecord>, MarkbookError> {
    let pages = decoder.decode_pages(pdf_bytes)?;

    let mut records = Vec::new();
    for page in &pages {
        let identity = identity::resolve_identity(&page.text);
        records.extend(rows::extract_rows(&page.tables, &identity, source_file));
    }

    Ok(records)
}

/// Run a batch of documents through the pipeline.
///
/// A document that fails to decode contributes zero records and is
/// recorded as a `DocumentFailure`; the remaining documents still
/// run. The returned dataset preserves document order.
pub fn extract_batch<'a, I>(documents: I, decoder: &dyn PageDecoder) -> BatchOutcome
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut batches = Vec::new();
    let mut failures = Vec::new();

    for (source_file, pdf_bytes) in documents {
        match extract_document(pdf_bytes, decoder, source_file) {
            Ok(records) => batches.push(records),
            Err(e) => failures.push(DocumentFailure {
                source_file: source_file.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    BatchOutcome {
        records: aggregate::aggregate(batches),
        failures,
    }
}
