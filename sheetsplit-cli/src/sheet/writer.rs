//! Chunk persistence via rust_xlsxwriter
//!
//! Output files carry exactly the table's cells: no row-index column, no
//! styling.

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use sheetsplit_core::Table;
use std::path::Path;

/// Write a table to `path` as a single-worksheet `.xlsx` file
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row_index, row) in table.rows().iter().enumerate() {
        for (col_index, cell) in row.iter().enumerate() {
            worksheet
                .write_string(row_index as u32, col_index as u16, cell)
                .with_context(|| format!("Failed to write cell to: {}", path.display()))?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save chunk file: {}", path.display()))?;
    Ok(())
}
