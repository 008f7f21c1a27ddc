//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Target path is missing or not a directory
    NotADirectory(String),
    /// Workbook contains no worksheet to read
    NoWorksheet(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotADirectory(path) => write!(f, "Not a directory: {path}"),
            CliError::NoWorksheet(path) => write!(f, "No worksheet in file: {path}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
