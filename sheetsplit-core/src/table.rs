//! Ordered-row table model
//!
//! All cell values are plain text; loaders coerce every cell to a string
//! before a table reaches the partitioner.

use std::ops::Range;

/// An in-memory table: ordered rows of text cells
///
/// Rows may be ragged. The partitioner treats each row as an opaque unit and
/// never inspects individual cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a table from pre-built rows
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Number of rows, header included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// A single row, if present
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Append one row at the bottom
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Borrow a contiguous window of rows
    ///
    /// Bounds are clamped to the row count, so an oversized range yields the
    /// available tail instead of panicking (positional-slice semantics).
    pub fn slice(&self, range: Range<usize>) -> &[Vec<String>] {
        let start = range.start.min(self.rows.len());
        let end = range.end.min(self.rows.len()).max(start);
        &self.rows[start..end]
    }
}

impl From<Vec<Vec<String>>> for Table {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::from_rows(rows)
    }
}
