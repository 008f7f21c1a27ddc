//! sheetsplit binary entry point

use clap::Parser;
use sheetsplit_cli::commands::Commands;

/// Split spreadsheet files into fixed-size row chunks
#[derive(Debug, Parser)]
#[command(name = "sheetsplit", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split(args) => args.execute(),
        Commands::Plan(args) => args.execute(),
    }
}
