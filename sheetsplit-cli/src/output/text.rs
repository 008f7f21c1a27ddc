//! Plain text report renderer

use super::ReportRenderer;
use crate::report::{FileStatus, RunReport};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text renderer - one line per file plus a closing summary
pub struct TextRenderer<W: Write> {
    writer: W,
}

impl<W: Write> TextRenderer<W> {
    /// Create a new text renderer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextRenderer<io::Stdout> {
    /// Create a renderer that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

fn display_name(outcome_path: &std::path::Path) -> String {
    outcome_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| outcome_path.display().to_string())
}

impl<W: Write + Send + Sync> ReportRenderer for TextRenderer<W> {
    fn render(&mut self, report: &RunReport) -> Result<()> {
        if report.files_found == 0 {
            writeln!(self.writer, "No spreadsheet files found.")?;
            self.writer.flush()?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "Found {} spreadsheet file(s)",
            report.files_found
        )?;

        for outcome in &report.outcomes {
            let name = display_name(&outcome.path);
            match &outcome.status {
                FileStatus::Split { chunks } => {
                    writeln!(self.writer, "  {name}: split into {chunks} chunk(s)")?
                }
                FileStatus::SkippedEmpty => {
                    writeln!(self.writer, "  {name}: skipped (empty table)")?
                }
                FileStatus::Failed { reason } => {
                    writeln!(self.writer, "  {name}: failed ({reason})")?
                }
            };
        }

        writeln!(
            self.writer,
            "{} processed, {} failed, {} chunk(s) written",
            report.files_processed(),
            report.files_failed(),
            report.chunks_written()
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "All files processed successfully!")?;
        self.writer.flush()?;
        Ok(())
    }
}
