//! CSV export of the current prospect view.

use chrono::NaiveDate;
use thiserror::Error;

use crate::prospect::Prospect;

pub const CSV_HEADER: &str = "Brand,Trigger,Score,Decision Maker,Next Action";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("No prospects to export")]
    Empty,
}

/// Picks the rows to export: the visible rows when there are any, otherwise
/// the full snapshot.
///
/// # Errors
///
/// Returns [`ExportError::Empty`] when both are empty.
pub fn select_export_rows<'a>(
    visible: &[&'a Prospect],
    all: &'a [Prospect],
) -> Result<Vec<&'a Prospect>, ExportError> {
    if !visible.is_empty() {
        return Ok(visible.to_vec());
    }
    if all.is_empty() {
        return Err(ExportError::Empty);
    }
    Ok(all.iter().collect())
}

/// Renders rows as CSV, in the order given.
///
/// Text columns are always quoted with embedded quotes doubled; the score is
/// written bare. Lines are joined with `\n` and there is no trailing newline.
#[must_use]
pub fn prospects_to_csv(rows: &[&Prospect]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for p in rows {
        lines.push(format!(
            "{},{},{},{},{}",
            quote(&p.brand),
            quote(&p.trigger),
            p.score,
            quote(&p.decision_maker),
            quote(&p.next_action),
        ));
    }
    lines.join("\n")
}

/// Download name for an export made on `date`.
#[must_use]
pub fn export_filename(date: NaiveDate) -> String {
    format!("stoneforged-prospects-{}.csv", date.format("%Y-%m-%d"))
}

/// [`export_filename`] for today's UTC date.
#[must_use]
pub fn export_filename_today() -> String {
    export_filename(chrono::Utc::now().date_naive())
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
