use serde::{Deserialize, Serialize};

/// Sentinel used when an identity label is absent from a page.
pub const UNKNOWN: &str = "Unknown";

/// Student identity fields resolved from a single page's text.
///
/// Resolution is page-scoped: a page whose text carries no labels
/// yields the `Unknown` sentinel for both fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentIdentity {
    pub usn: String,
    pub name: String,
}

impl Default for StudentIdentity {
    fn default() -> Self {
        StudentIdentity {
            usn: UNKNOWN.to_string(),
            name: UNKNOWN.to_string(),
        }
    }
}

/// One extracted subject-result row, tagged with the identity resolved
/// on its page and the document it came from.
///
/// Mark fields stay strings: source formatting varies ("AB" for
/// absent, blank for not applicable) and no numeric validation is
/// performed at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub usn: String,
    pub student_name: String,
    pub subject_code: String,
    pub subject_name: String,
    pub internal_mark: String,
    pub external_mark: String,
    pub total_mark: String,
    pub result: String,
    pub source_file: String,
}

/// A decoded table row: raw cell strings as the PDF layer produced
/// them. Cells may be missing entirely or contain embedded newlines.
pub type RawRow = Vec<Option<String>>;

/// The full ordered collection of records across all documents.
pub type ResultDataset = Vec<ResultRecord>;

/// A document that could not be decoded at all. The document
/// contributes zero records; the failure is carried alongside the
/// dataset instead of aborting the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFailure {
    pub source_file: String,
    pub reason: String,
}

/// Outcome of running a batch of documents through the pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub records: ResultDataset,
    pub failures: Vec<DocumentFailure>,
}

impl BatchOutcome {
    /// True when no document yielded a single qualifying row.
    /// Distinct from `failures` being non-empty: a batch can decode
    /// every document cleanly and still find no result rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
