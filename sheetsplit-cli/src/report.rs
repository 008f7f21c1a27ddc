//! Outcome accounting for a split run

use serde::Serialize;
use std::path::PathBuf;

/// Result of processing one input file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FileStatus {
    /// The file was split into this many chunk files
    Split {
        /// Number of chunk files written
        chunks: usize,
    },
    /// The file held no rows at all and was skipped
    SkippedEmpty,
    /// Reading or writing failed; the run moved on
    Failed {
        /// Human-readable failure chain
        reason: String,
    },
}

/// One input file and what happened to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOutcome {
    /// Path of the input file
    pub path: PathBuf,
    /// Result of processing it
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Tally of a whole run, in processing order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunReport {
    /// Number of spreadsheet files discovered
    pub files_found: usize,
    /// Per-file outcomes
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    /// Start a report for a scan that found `files_found` files
    pub fn new(files_found: usize) -> Self {
        Self {
            files_found,
            outcomes: Vec::new(),
        }
    }

    /// Append the outcome for one file
    pub fn record(&mut self, path: PathBuf, status: FileStatus) {
        self.outcomes.push(FileOutcome { path, status });
    }

    /// Files handled without failure (split or skipped)
    pub fn files_processed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| {
                matches!(
                    outcome.status,
                    FileStatus::Split { .. } | FileStatus::SkippedEmpty
                )
            })
            .count()
    }

    /// Files skipped because they held no rows
    pub fn files_skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == FileStatus::SkippedEmpty)
            .count()
    }

    /// Files that failed to read or write
    pub fn files_failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.status, FileStatus::Failed { .. }))
            .count()
    }

    /// Chunk files written across the whole run
    pub fn chunks_written(&self) -> usize {
        self.outcomes
            .iter()
            .map(|outcome| match outcome.status {
                FileStatus::Split { chunks } => chunks,
                _ => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_report() -> RunReport {
        let mut report = RunReport::new(4);
        report.record(PathBuf::from("a.xlsx"), FileStatus::Split { chunks: 3 });
        report.record(PathBuf::from("b.xlsx"), FileStatus::SkippedEmpty);
        report.record(
            PathBuf::from("c.xlsx"),
            FileStatus::Failed {
                reason: "corrupt archive".to_string(),
            },
        );
        report.record(PathBuf::from("d.xlsx"), FileStatus::Split { chunks: 1 });
        report
    }

    #[test]
    fn test_counters_tally_outcomes() {
        let report = sample_report();

        assert_eq!(report.files_found, 4);
        assert_eq!(report.files_processed(), 3);
        assert_eq!(report.files_skipped(), 1);
        assert_eq!(report.files_failed(), 1);
        assert_eq!(report.chunks_written(), 4);
    }

    #[test]
    fn test_status_serializes_with_kind_tag() {
        assert_eq!(
            serde_json::to_value(FileStatus::Split { chunks: 3 }).unwrap(),
            json!({"kind": "split", "chunks": 3})
        );
        assert_eq!(
            serde_json::to_value(FileStatus::SkippedEmpty).unwrap(),
            json!({"kind": "skipped_empty"})
        );
        assert_eq!(
            serde_json::to_value(FileStatus::Failed {
                reason: "boom".to_string()
            })
            .unwrap(),
            json!({"kind": "failed", "reason": "boom"})
        );
    }

    #[test]
    fn test_outcome_flattens_status_fields() {
        let outcome = FileOutcome {
            path: PathBuf::from("a.xlsx"),
            status: FileStatus::Split { chunks: 2 },
        };

        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"path": "a.xlsx", "kind": "split", "chunks": 2})
        );
    }

    #[test]
    fn test_empty_report_counts_nothing() {
        let report = RunReport::new(0);

        assert_eq!(report.files_processed(), 0);
        assert_eq!(report.files_failed(), 0);
        assert_eq!(report.chunks_written(), 0);
    }
}
