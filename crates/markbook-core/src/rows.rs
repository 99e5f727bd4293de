use std::sync::LazyLock;

use regex::Regex;

use crate::model::{RawRow, ResultRecord, StudentIdentity};

/// A genuine subject row starts with a subject code: at least five
/// uppercase letters/digits at the very start of the first cell
/// (e.g. "BMATE201"). Anything after the run is ignored.
static SUBJECT_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{5,}").expect("subject code pattern is valid"));

/// Classify and normalize table rows into result records.
///
/// Rows that fail qualification (headers, spacers, noise) are dropped
/// silently. Output order matches row order within each table, tables
/// in the order given. Re-running on the same input yields an
/// identical sequence; nothing is mutated in place.
pub fn extract_rows(
    tables: &[Vec<RawRow>],
    identity: &StudentIdentity,
    source_file: &str,
) -> Vec<ResultRecord> {
    let mut records = Vec::new();

    for table in tables {
        for row in table {
            let cells: Vec<String> = row.iter().map(|c| clean_cell(c.as_deref())).collect();
            if let Some(record) = to_record(&cells, identity, source_file) {
                records.push(record);
            }
        }
    }

    records
}

/// Normalize one raw cell: missing cell becomes the empty string,
/// embedded newlines become single spaces, surrounding whitespace is
/// trimmed.
fn clean_cell(cell: Option<&str>) -> String {
    match cell {
        Some(s) => s.replace('\n', " ").trim().to_string(),
        None => String::new(),
    }
}

/// Build a record from a normalized row, or reject it.
///
/// Qualification: at least 6 cells, and the first cell must start
/// with a subject-code run. Cells beyond index 5 are ignored.
fn to_record(cells: &[String], identity: &StudentIdentity, source_file: &str) -> Option<ResultRecord> {
    if cells.len() < 6 {
        return None;
    }
    if !SUBJECT_CODE_RE.is_match(&cells[0]) {
        return None;
    }

    let (internal, external) = repair_merged_marks(cells[2].clone(), cells[3].clone());

    Some(ResultRecord {
        usn: identity.usn.clone(),
        student_name: identity.name.clone(),
        subject_code: cells[0].clone(),
        subject_name: cells[1].clone(),
        internal_mark: internal,
        external_mark: external,
        total_mark: cells[4].clone(),
        result: cells[5].clone(),
        source_file: source_file.to_string(),
    })
}

/// Repair the known layout artifact where internal and external marks
/// collapse into one cell ("25 40" with an empty external cell).
///
/// Only an exact split into two all-digit tokens is repaired; any
/// other shape passes through verbatim rather than being guessed at.
fn repair_merged_marks(internal: String, external: String) -> (String, String) {
    if external.is_empty() && internal.contains(char::is_whitespace) {
        let parts: Vec<&str> = internal.split_whitespace().collect();
        if parts.len() == 2 && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())) {
            return (parts[0].to_string(), parts[1].to_string());
        }
    }
    (internal, external)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|c| Some(c.to_string())).collect()
    }

    fn identity() -> StudentIdentity {
        StudentIdentity {
            usn: "1AB21CS001".into(),
            name: "JOHN DOE".into(),
        }
    }

    #[test]
    fn test_qualifying_row_maps_positionally() {
        let tables = vec![vec![row(&["BMATE201", "Mathematics II", "25", "40", "65", "P"])]];
        let records = extract_rows(&tables, &identity(), "sem2.pdf");
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.subject_code, "BMATE201");
        assert_eq!(r.subject_name, "Mathematics II");
        assert_eq!(r.internal_mark, "25");
        assert_eq!(r.external_mark, "40");
        assert_eq!(r.total_mark, "65");
        assert_eq!(r.result, "P");
        assert_eq!(r.usn, "1AB21CS001");
        assert_eq!(r.source_file, "sem2.pdf");
    }

    #[test]
    fn test_merged_marks_are_repaired() {
        let tables = vec![vec![row(&["BMATE201", "Math", "25 40", "", "65", "P"])]];
        let records = extract_rows(&tables, &identity(), "a.pdf");
        assert_eq!(records[0].internal_mark, "25");
        assert_eq!(records[0].external_mark, "40");
    }

    #[test]
    fn test_three_token_internal_passes_through() {
        let tables = vec![vec![row(&["BMATE201", "Math", "25 40 10", "", "65", "P"])]];
        let records = extract_rows(&tables, &identity(), "a.pdf");
        assert_eq!(records[0].internal_mark, "25 40 10");
        assert_eq!(records[0].external_mark, "");
    }

    #[test]
    fn test_non_numeric_tokens_pass_through() {
        let tables = vec![vec![row(&["BMATE201", "Math", "AB 40", "", "40", "F"])]];
        let records = extract_rows(&tables, &identity(), "a.pdf");
        assert_eq!(records[0].internal_mark, "AB 40");
        assert_eq!(records[0].external_mark, "");
    }

    #[test]
    fn test_no_repair_when_external_present() {
        let tables = vec![vec![row(&["BMATE201", "Math", "25 40", "38", "65", "P"])]];
        let records = extract_rows(&tables, &identity(), "a.pdf");
        assert_eq!(records[0].internal_mark, "25 40");
        assert_eq!(records[0].external_mark, "38");
    }

    #[test]
    fn test_short_code_prefix_rejected() {
        // "25 A": alphanumeric prefix is "25", length 2 < 5.
        let tables = vec![vec![row(&["25 A", "X", "", "", "", ""])]];
        assert!(extract_rows(&tables, &identity(), "a.pdf").is_empty());
    }

    #[test]
    fn test_header_row_rejected() {
        let tables = vec![vec![row(&[
            "Subject Code",
            "Subject Name",
            "Internal",
            "External",
            "Total",
            "Result",
        ])]];
        assert!(extract_rows(&tables, &identity(), "a.pdf").is_empty());
    }

    #[test]
    fn test_too_few_cells_rejected() {
        let tables = vec![vec![row(&["BMATE201", "Math", "25", "40", "65"])]];
        assert!(extract_rows(&tables, &identity(), "a.pdf").is_empty());
    }

    #[test]
    fn test_code_prefix_match_ignores_trailing_chars() {
        let tables = vec![vec![row(&["BMATE201 (NEP)", "Math", "25", "40", "65", "P"])]];
        let records = extract_rows(&tables, &identity(), "a.pdf");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subject_code, "BMATE201 (NEP)");
    }

    #[test]
    fn test_null_cells_and_newlines_normalized() {
        let raw: RawRow = vec![
            Some("BMATE201".into()),
            Some("Engineering\nMathematics".into()),
            Some(" 25 ".into()),
            None,
            Some("65".into()),
            Some("P".into()),
        ];
        let records = extract_rows(&[vec![raw]], &identity(), "a.pdf");
        assert_eq!(records[0].subject_name, "Engineering Mathematics");
        assert_eq!(records[0].internal_mark, "25");
        assert_eq!(records[0].external_mark, "");
    }

    #[test]
    fn test_cells_beyond_six_ignored() {
        let tables = vec![vec![row(&[
            "BMATE201", "Math", "25", "40", "65", "P", "extra", "cells",
        ])]];
        let records = extract_rows(&tables, &identity(), "a.pdf");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].result, "P");
    }

    #[test]
    fn test_extract_is_idempotent() {
        let tables = vec![vec![
            row(&["BMATE201", "Math", "25 40", "", "65", "P"]),
            row(&["BPHYS202", "Physics", "28", "42", "70", "P"]),
        ]];
        let first = extract_rows(&tables, &identity(), "a.pdf");
        let second = extract_rows(&tables, &identity(), "a.pdf");
        assert_eq!(first, second);
    }
}
