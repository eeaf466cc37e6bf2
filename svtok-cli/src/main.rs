//! svtok: Swedish tokenizer and sentence segmenter

use clap::Parser;
use svtok_cli::commands::Commands;
use svtok_cli::CliResult;

/// Tokenize Swedish text and split it into sentences
#[derive(Debug, Parser)]
#[command(name = "svtok", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
