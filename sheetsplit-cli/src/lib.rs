//! Sheetsplit CLI library
//!
//! This library provides the command-line interface for splitting
//! spreadsheet files into fixed-size row chunks.

pub mod commands;
pub mod discovery;
pub mod error;
pub mod output;
pub mod params;
pub mod progress;
pub mod report;
pub mod runner;
pub mod sheet;

pub use error::{CliError, CliResult};
