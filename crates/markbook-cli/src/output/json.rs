use markbook_core::error::MarkbookError;
use markbook_core::model::ResultRecord;

pub fn print(records: &[ResultRecord]) -> Result<(), MarkbookError> {
    let json = serde_json::to_string_pretty(records)?;
    println!("{json}");
    Ok(())
}
