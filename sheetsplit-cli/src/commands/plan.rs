//! Plan command implementation

use crate::discovery;
use crate::runner::file_label;
use crate::sheet;
use anyhow::Result;
use clap::Args;
use sheetsplit_core::{PartitionOutcome, Partitioner, SplitParameters};
use std::path::PathBuf;

/// Arguments for the plan command
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Directory to scan for spreadsheet files
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Data rows per chunk file
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = crate::params::DEFAULT_CHUNK_ROWS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub rows: usize,

    /// Repeat the first row at the top of every chunk
    #[arg(short, long)]
    pub keep_header: bool,
}

impl PlanArgs {
    /// Execute the plan command
    pub fn execute(&self) -> Result<()> {
        let parameters = SplitParameters::new(self.rows, self.keep_header)?;
        let files = discovery::find_spreadsheets(&self.directory)?;
        if files.is_empty() {
            println!("No spreadsheet files found.");
            return Ok(());
        }

        println!(
            "Planning splits for {} spreadsheet file(s) in {}",
            files.len(),
            self.directory.display()
        );

        let partitioner = Partitioner::new(parameters);
        let mut failed = 0usize;
        let mut total_chunks = 0usize;

        for path in &files {
            let name = file_label(path);
            let table = match sheet::read_table(path) {
                Ok(table) => table,
                Err(err) => {
                    failed += 1;
                    println!("✗ {name}: {err:#}");
                    continue;
                }
            };

            match partitioner.partition(&table) {
                PartitionOutcome::EmptyTable => {
                    println!("- {name}: empty, nothing to split");
                }
                PartitionOutcome::Chunks(chunks) if chunks.is_empty() => {
                    println!("- {name}: header only, nothing to split");
                }
                PartitionOutcome::Chunks(chunks) => {
                    println!("✓ {name}: {} chunk(s)", chunks.len());
                    let basename = path
                        .file_stem()
                        .map(|stem| stem.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    for chunk in &chunks {
                        println!(
                            "    {}: data rows {}-{}",
                            chunk.file_name(&basename),
                            chunk.start + 1,
                            chunk.start + chunk.data_rows
                        );
                    }
                    total_chunks += chunks.len();
                }
            }
        }

        println!(
            "{} file(s) scanned, {} failed, {} chunk file(s) would be written",
            files.len(),
            failed,
            total_chunks
        );
        Ok(())
    }
}
