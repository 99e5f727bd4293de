use std::path::PathBuf;

use markbook_core::error::MarkbookError;
use markbook_core::extraction::pdftotext::PdftotextDecoder;

use crate::commands::extract::display_name;
use crate::output;

pub fn run(input_file: PathBuf, output_format: &str) -> Result<(), MarkbookError> {
    if !PdftotextDecoder::is_available() {
        return Err(MarkbookError::PdftotextNotFound);
    }

    let pdf_bytes = std::fs::read(&input_file)?;
    let decoder = PdftotextDecoder::new();
    let source_file = display_name(&input_file);

    let records = markbook_core::extract_document(&pdf_bytes, &decoder, &source_file)?;

    match output_format {
        "json" => output::json::print(&records)?,
        _ => output::table::print(&records),
    }

    Ok(())
}
