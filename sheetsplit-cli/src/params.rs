//! Split parameter gathering from flags or interactive prompts

use crate::error::CliResult;
use anyhow::Context;
use sheetsplit_core::SplitParameters;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Default number of data rows per chunk when none is given
pub const DEFAULT_CHUNK_ROWS: usize = 100;

/// Everything a split run needs: where to look and how to cut
#[derive(Debug, Clone)]
pub struct SplitRequest {
    /// Directory scanned for spreadsheet files
    pub directory: PathBuf,
    /// Chunk size and header policy
    pub parameters: SplitParameters,
}

/// Source of split parameters
///
/// `Ok(None)` means the user backed out; the run should stop without error.
pub trait ParameterSource {
    /// Produce a request, or `None` when the user aborts
    fn gather(&mut self) -> CliResult<Option<SplitRequest>>;
}

/// Parameters taken verbatim from command-line flags
pub struct FlagSource {
    directory: PathBuf,
    rows: usize,
    keep_header: bool,
}

impl FlagSource {
    /// Create a source from already-parsed flag values
    pub fn new(directory: PathBuf, rows: usize, keep_header: bool) -> Self {
        Self {
            directory,
            rows,
            keep_header,
        }
    }
}

impl ParameterSource for FlagSource {
    fn gather(&mut self) -> CliResult<Option<SplitRequest>> {
        let parameters = SplitParameters::new(self.rows, self.keep_header)?;
        Ok(Some(SplitRequest {
            directory: self.directory.clone(),
            parameters,
        }))
    }
}

/// Interactive prompts on a reader/writer pair
///
/// Generic over the streams so tests can drive it with in-memory buffers.
pub struct PromptSource<R, W> {
    input: R,
    output: W,
}

impl PromptSource<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's standard streams
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    /// Create a prompt source over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str) -> CliResult<String> {
        write!(self.output, "{prompt}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read response")?;
        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: &str) -> CliResult<()> {
        writeln!(self.output, "{message}").context("Failed to write message")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> ParameterSource for PromptSource<R, W> {
    fn gather(&mut self) -> CliResult<Option<SplitRequest>> {
        let directory = self.ask("Directory containing spreadsheet files: ")?;
        if directory.is_empty() {
            self.say("No directory selected.")?;
            return Ok(None);
        }

        let answer = self.ask(&format!("Rows per split file [{DEFAULT_CHUNK_ROWS}]: "))?;
        let rows = if answer.is_empty() {
            DEFAULT_CHUNK_ROWS
        } else {
            match answer.parse::<usize>() {
                Ok(value) if value >= 1 => value,
                _ => {
                    self.say("Invalid chunk size.")?;
                    return Ok(None);
                }
            }
        };

        let answer = self.ask("Keep the header row in every split file? [y/N]: ")?;
        let keep_header = matches!(answer.to_lowercase().as_str(), "y" | "yes");

        let parameters = SplitParameters::new(rows, keep_header)?;
        Ok(Some(SplitRequest {
            directory: PathBuf::from(directory),
            parameters,
        }))
    }
}
