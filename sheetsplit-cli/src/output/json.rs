//! JSON report renderer

use super::ReportRenderer;
use crate::report::{FileOutcome, RunReport};
use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};

/// JSON renderer - emits the whole report as one pretty-printed object
pub struct JsonRenderer<W: Write> {
    writer: W,
}

/// Wire shape: summary counters plus the per-file outcome list
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    files_found: usize,
    files_processed: usize,
    files_skipped: usize,
    files_failed: usize,
    chunks_written: usize,
    files: &'a [FileOutcome],
}

impl<W: Write> JsonRenderer<W> {
    /// Create a new JSON renderer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl JsonRenderer<io::Stdout> {
    /// Create a renderer that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> ReportRenderer for JsonRenderer<W> {
    fn render(&mut self, report: &RunReport) -> Result<()> {
        let payload = JsonReport {
            files_found: report.files_found,
            files_processed: report.files_processed(),
            files_skipped: report.files_skipped(),
            files_failed: report.files_failed(),
            chunks_written: report.chunks_written(),
            files: &report.outcomes,
        };
        serde_json::to_writer_pretty(&mut self.writer, &payload)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
