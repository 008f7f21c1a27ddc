//! Report rendering module

use crate::report::RunReport;
use anyhow::Result;

/// Trait for report renderers
pub trait ReportRenderer: Send + Sync {
    /// Render the final run report
    fn render(&mut self, report: &RunReport) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;
