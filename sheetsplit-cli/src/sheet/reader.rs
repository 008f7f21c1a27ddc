//! Spreadsheet loading via calamine
//!
//! Every cell is coerced to text; the partitioner never sees typed values.

use crate::error::CliError;
use anyhow::{Context, Result};
use calamine::{open_workbook, Data, Range, Reader, Xls, Xlsx};
use sheetsplit_core::Table;
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load the first worksheet of a spreadsheet file as a text table
///
/// `.xls` and `.xlsx` are told apart by extension, case-insensitively;
/// discovery only hands over paths carrying one of the two.
pub fn read_table(path: &Path) -> Result<Table> {
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);

    let range = match extension.as_deref() {
        Some("xls") => {
            let mut workbook: Xls<BufReader<File>> = open_workbook(path)
                .with_context(|| format!("Failed to open spreadsheet: {}", path.display()))?;
            first_worksheet(&mut workbook, path)?
        }
        _ => {
            let mut workbook: Xlsx<BufReader<File>> = open_workbook(path)
                .with_context(|| format!("Failed to open spreadsheet: {}", path.display()))?;
            first_worksheet(&mut workbook, path)?
        }
    };

    let mut table = Table::new();
    for row in range.rows() {
        table.push_row(row.iter().map(cell_text).collect());
    }
    Ok(table)
}

fn first_worksheet<R>(workbook: &mut R, path: &Path) -> Result<Range<Data>>
where
    R: Reader<BufReader<File>>,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CliError::NoWorksheet(path.display().to_string()))?
        .with_context(|| format!("Failed to read worksheet from: {}", path.display()))
}

/// All cells become text; blank cells become empty strings
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
