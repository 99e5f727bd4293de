use crate::error::MarkbookError;
use crate::extraction::{PageContent, PageDecoder};
use crate::model::RawRow;
use std::io::Write;
use std::process::Command;

/// PDF decoding backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` so the column alignment of marks tables
/// survives as whitespace, then rebuilds tables from the aligned text:
/// consecutive lines that split into two or more columns form one
/// table.
pub struct PdftotextDecoder;

impl PdftotextDecoder {
    pub fn new() -> Self {
        PdftotextDecoder
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PageDecoder for PdftotextDecoder {
    fn decode_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, MarkbookError> {
        // pdftotext reads from a file, so spool the bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| MarkbookError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| MarkbookError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    MarkbookError::PdftotextNotFound
                } else {
                    MarkbookError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(MarkbookError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);

        // pdftotext separates pages with form feed \x0c
        let pages: Vec<PageContent> = text
            .split('\x0c')
            .enumerate()
            .map(|(i, page_text)| {
                let lines: Vec<&str> = page_text.lines().collect();
                PageContent {
                    page_number: i + 1,
                    text: page_text.to_string(),
                    tables: detect_tables(&lines),
                }
            })
            .filter(|p| !p.text.trim().is_empty() || p.page_number == 1)
            .collect();

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Rebuild tables from layout-preserved text.
///
/// A line that splits into 2+ whitespace-gap columns is a table row;
/// a contiguous run of such lines is one table. Single-column lines
/// (prose, identity labels) end the current table.
fn detect_tables(lines: &[&str]) -> Vec<Vec<RawRow>> {
    let mut tables = Vec::new();
    let mut current: Vec<RawRow> = Vec::new();

    for line in lines {
        let segments = split_by_whitespace_gaps(line);
        if segments.len() >= 2 {
            current.push(segments.into_iter().map(|s| Some(s.to_string())).collect());
        } else if !current.is_empty() {
            tables.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        tables.push(current);
    }

    tables
}

/// Split a line by gaps of 2+ whitespace characters. A single space
/// stays inside a cell, which is what lets merged mark pairs like
/// "25 40" arrive as one cell for the repair heuristic downstream.
fn split_by_whitespace_gaps(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = None;
    // Byte index of the first whitespace char in the current gap;
    // whitespace is not always one byte (e.g. U+00A0).
    let mut gap_start = None;
    let mut space_count = 0;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            if space_count == 0 {
                gap_start = Some(i);
            }
            space_count += 1;
            if space_count == 2 {
                if let (Some(s), Some(end)) = (start, gap_start) {
                    segments.push(&line[s..end]);
                    start = None;
                }
            }
        } else {
            if start.is_none() {
                start = Some(i);
            }
            space_count = 0;
        }
    }

    if let Some(s) = start {
        segments.push(&line[s..]);
    }

    segments
}
