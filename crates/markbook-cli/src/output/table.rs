use markbook_core::export::COLUMNS;
use markbook_core::model::ResultRecord;

/// Print records as an aligned text table in the export column order.
pub fn print(records: &[ResultRecord]) {
    if records.is_empty() {
        println!("(no result rows)");
        return;
    }

    let rows: Vec<[&str; 9]> = records
        .iter()
        .map(|r| {
            [
                r.usn.as_str(),
                r.student_name.as_str(),
                r.subject_code.as_str(),
                r.subject_name.as_str(),
                r.internal_mark.as_str(),
                r.external_mark.as_str(),
                r.total_mark.as_str(),
                r.result.as_str(),
                r.source_file.as_str(),
            ]
        })
        .collect();

    let mut widths: [usize; 9] = [0; 9];
    for (i, title) in COLUMNS.iter().enumerate() {
        widths[i] = title.len();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    print_row(&COLUMNS, &widths);
    for row in &rows {
        print_row(row, &widths);
    }

    println!("\n{} record(s)", records.len());
}

fn print_row(cells: &[&str; 9], widths: &[usize; 9]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, w)| format!("{:<width$}", cell, width = w))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", line.trim_end());
}
