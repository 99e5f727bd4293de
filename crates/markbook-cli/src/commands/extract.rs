use std::path::{Path, PathBuf};

use markbook_core::error::MarkbookError;
use markbook_core::export;
use markbook_core::extract_batch;
use markbook_core::extraction::pdftotext::PdftotextDecoder;
use markbook_core::model::DocumentFailure;

pub fn run(input_files: Vec<PathBuf>, out: Option<PathBuf>) -> Result<(), MarkbookError> {
    if !PdftotextDecoder::is_available() {
        return Err(MarkbookError::PdftotextNotFound);
    }
    let decoder = PdftotextDecoder::new();
    let total = input_files.len();

    // Per-batch context: document list, progress counter, accumulated
    // failures. Files that cannot be read fail at this level; decode
    // failures come back from the core in the BatchOutcome.
    let mut sources: Vec<(String, Vec<u8>)> = Vec::new();
    let mut failures: Vec<DocumentFailure> = Vec::new();

    for path in &input_files {
        let source_file = display_name(path);
        match std::fs::read(path) {
            Ok(bytes) => sources.push((source_file, bytes)),
            Err(e) => failures.push(DocumentFailure {
                source_file,
                reason: e.to_string(),
            }),
        }
    }

    let readable = sources.len();
    let outcome = extract_batch(
        sources.iter().enumerate().map(|(idx, (name, bytes))| {
            eprintln!("[{}/{}] processing {}", idx + 1, readable, name);
            (name.as_str(), bytes.as_slice())
        }),
        &decoder,
    );
    failures.extend(outcome.failures);

    for failure in &failures {
        eprintln!("  failed: {}: {}", failure.source_file, failure.reason);
    }

    if outcome.records.is_empty() {
        if failures.len() == total {
            eprintln!("No documents could be processed.");
        } else {
            eprintln!(
                "No result rows found in {} file(s). Check that the PDFs match the expected marks-card format.",
                total
            );
        }
        return Ok(());
    }

    let out_path = out.unwrap_or_else(|| PathBuf::from(export::DEFAULT_EXPORT_NAME));
    let xlsx_bytes = export::to_xlsx(&outcome.records)?;
    std::fs::write(&out_path, xlsx_bytes)?;

    eprintln!(
        "Extracted {} record(s) from {} file(s), written to {}",
        outcome.records.len(),
        total - failures.len(),
        out_path.display()
    );

    Ok(())
}

/// File name used to tag records, matching what a user would
/// recognize from the upload list.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
