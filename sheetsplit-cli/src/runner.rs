//! File orchestration: scan a directory, split each file, tally outcomes
//!
//! Failures are per-file: a file that cannot be read or written is recorded
//! in the report and the run moves on to the next one. Only problems before
//! the first file (an unusable directory) abort the whole run.

use crate::discovery;
use crate::error::CliResult;
use crate::params::SplitRequest;
use crate::progress::ProgressReporter;
use crate::report::{FileStatus, RunReport};
use crate::sheet;
use anyhow::Context;
use sheetsplit_core::naming::splits_dir_name;
use sheetsplit_core::{PartitionOutcome, Partitioner};
use std::fs;
use std::path::Path;

/// Split every spreadsheet file in the requested directory
pub fn run(request: &SplitRequest, progress: &mut ProgressReporter) -> CliResult<RunReport> {
    let files = discovery::find_spreadsheets(&request.directory)?;
    let mut report = RunReport::new(files.len());
    if files.is_empty() {
        return Ok(report);
    }

    log::info!(
        "Found {} spreadsheet file(s) in {}",
        files.len(),
        request.directory.display()
    );

    let partitioner = Partitioner::new(request.parameters);
    progress.init_files(files.len() as u64);

    for path in &files {
        let status = match process_file(path, &partitioner, progress) {
            Ok(status) => status,
            Err(err) => {
                log::error!("Failed to process {}: {:#}", path.display(), err);
                FileStatus::Failed {
                    reason: format!("{err:#}"),
                }
            }
        };
        progress.file_completed(&file_label(path));
        report.record(path.clone(), status);
    }

    progress.finish();
    Ok(report)
}

fn process_file(
    path: &Path,
    partitioner: &Partitioner,
    progress: &ProgressReporter,
) -> CliResult<FileStatus> {
    let table = sheet::read_table(path)?;

    let chunks = match partitioner.partition(&table) {
        PartitionOutcome::EmptyTable => {
            log::warn!("Skipping empty file: {}", path.display());
            return Ok(FileStatus::SkippedEmpty);
        }
        PartitionOutcome::Chunks(chunks) => chunks,
    };
    // A header-only file produces no chunks; nothing to persist.
    if chunks.is_empty() {
        return Ok(FileStatus::Split { chunks: 0 });
    }

    let stem = path
        .file_stem()
        .with_context(|| format!("No file name in: {}", path.display()))?;
    let basename = stem.to_string_lossy();
    let parent = path
        .parent()
        .with_context(|| format!("No parent directory for: {}", path.display()))?;

    let splits_dir = parent.join(splits_dir_name(&basename));
    fs::create_dir_all(&splits_dir)
        .with_context(|| format!("Failed to create output folder: {}", splits_dir.display()))?;

    for chunk in &chunks {
        let file_name = chunk.file_name(&basename);
        let target = splits_dir.join(&file_name);
        sheet::write_table(&chunk.table, &target)?;
        log::info!("Saved {}", target.display());
        progress.chunk_saved(&file_name);
    }

    Ok(FileStatus::Split {
        chunks: chunks.len(),
    })
}

pub(crate) fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
