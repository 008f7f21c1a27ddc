//! Split command implementation

use crate::output::{JsonRenderer, ReportRenderer, TextRenderer};
use crate::params::{FlagSource, ParameterSource, PromptSource, DEFAULT_CHUNK_ROWS};
use crate::progress::ProgressReporter;
use crate::runner;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Directory to scan for spreadsheet files (prompts when omitted)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Data rows per chunk file
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = DEFAULT_CHUNK_ROWS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub rows: usize,

    /// Repeat the first row at the top of every chunk
    #[arg(short, long)]
    pub keep_header: bool,

    /// Report format for the final summary
    #[arg(long, value_enum, default_value = "text")]
    pub report: ReportFormat,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Report formats for the final summary
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable lines
    Text,
    /// Pretty-printed JSON object
    Json,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        let mut source: Box<dyn ParameterSource> = match &self.directory {
            Some(directory) => Box::new(FlagSource::new(
                directory.clone(),
                self.rows,
                self.keep_header,
            )),
            None => Box::new(PromptSource::stdin()),
        };

        // The source already told the user why it stopped.
        let Some(request) = source.gather()? else {
            return Ok(());
        };

        log::info!("Splitting files in {}", request.directory.display());
        log::debug!("Arguments: {:?}", self);

        let mut progress = ProgressReporter::new(self.quiet);
        let report = runner::run(&request, &mut progress)?;

        let mut renderer: Box<dyn ReportRenderer> = match self.report {
            ReportFormat::Text => Box::new(TextRenderer::stdout()),
            ReportFormat::Json => Box::new(JsonRenderer::stdout()),
        };
        renderer.render(&report)?;

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}
