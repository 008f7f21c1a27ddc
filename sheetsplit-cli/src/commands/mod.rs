//! CLI command implementations

use clap::Subcommand;

pub mod plan;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split spreadsheet files into fixed-size row chunks
    Split(split::SplitArgs),

    /// Preview the chunk layout without writing any files
    Plan(plan::PlanArgs),
}
