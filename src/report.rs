use crate::error::{Result, SiftError};
use crate::types::{ExtractionRecord, RejectionRecord};
use std::fs;
use std::path::Path;

/// Joins multiple matched addresses inside one table cell.
const EMAIL_SEPARATOR: &str = "; ";

/// Write the extraction table: one row per fetched URL, columns
/// `url,Company Email`. URLs with no matches keep their row with an empty
/// email cell. Callers skip this entirely when there are no records.
pub fn write_extractions(records: &[ExtractionRecord], path: &Path) -> Result<()> {
    let mut table = String::from("url,Company Email\n");
    for record in records {
        let emails = record.emails.join(EMAIL_SEPARATOR);
        table.push_str(&csv_row(&[record.url.as_str(), emails.as_str()]));
    }
    save_table(&table, path)
}

/// Write the rejection table: one row per failed URL, columns `url,reason`.
pub fn write_rejections(records: &[RejectionRecord], path: &Path) -> Result<()> {
    let mut table = String::from("url,reason\n");
    for record in records {
        table.push_str(&csv_row(&[record.url.as_str(), record.reason.as_str()]));
    }
    save_table(&table, path)
}

fn save_table(content: &str, path: &Path) -> Result<()> {
    fs::write(path, content).map_err(|source| SiftError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_row(fields: &[&str]) -> String {
    let mut row = fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",");
    row.push('\n');
    row
}

/// Quote a field when it contains the delimiter, quotes, or line breaks.
fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
