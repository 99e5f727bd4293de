use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::error::MarkbookError;
use crate::model::ResultRecord;

/// Default file name offered for the exported spreadsheet.
pub const DEFAULT_EXPORT_NAME: &str = "VTU_Bulk_Results.xlsx";

/// Fixed column order of the exported sheet.
pub const COLUMNS: [&str; 9] = [
    "USN",
    "Student Name",
    "Subject Code",
    "Subject Name",
    "Internal",
    "External",
    "Total",
    "Result",
    "Source File",
];

/// Serialize the dataset into a single-sheet xlsx workbook.
///
/// One header row, then one data row per record in dataset order. All
/// cells are written as strings; marks are not reinterpreted here.
pub fn to_xlsx(records: &[ResultRecord]) -> Result<Vec<u8>, MarkbookError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Results").map_err(export_err)?;

    let header_format = Format::new().set_bold();
    for (col, title) in COLUMNS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *title, &header_format)
            .map_err(export_err)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        let cells = [
            &record.usn,
            &record.student_name,
            &record.subject_code,
            &record.subject_name,
            &record.internal_mark,
            &record.external_mark,
            &record.total_mark,
            &record.result,
            &record.source_file,
        ];
        for (col, value) in cells.iter().enumerate() {
            sheet
                .write_string(row, col as u16, value.as_str())
                .map_err(export_err)?;
        }
    }

    workbook.save_to_buffer().map_err(export_err)
}

fn export_err(e: XlsxError) -> MarkbookError {
    MarkbookError::Export(e.to_string())
}
