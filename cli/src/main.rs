//! gptbpe CLI - Command-line interface for the BPE tokenizer.
//!
//! This is the main entry point for the `gptbpe` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{DecodeCommand, EncodeCommand, ExportCommand, InspectCommand, TokenizeCommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gptbpe")]
#[command(about = "GPT-style word-level BPE tokenizer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split text into subword tokens
    Tokenize(TokenizeCommand),
    /// Encode text to token IDs
    Encode(EncodeCommand),
    /// Decode token IDs back to text
    Decode(DecodeCommand),
    /// Re-export vocab.json and merges.txt
    Export(ExportCommand),
    /// Print vocabulary and merge statistics
    Inspect(InspectCommand),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tokenize(cmd) => commands::tokenize::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Export(cmd) => commands::export::run(cmd)?,
        Commands::Inspect(cmd) => commands::inspect::run(cmd)?,
    }

    Ok(())
}
