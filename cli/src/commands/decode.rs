//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Directory holding vocab.json and merges.txt
    #[arg(short, long)]
    pub tokenizer: String,

    /// Token IDs to decode, separated by spaces or commas ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,
}

use super::{load_tokenizer, read_input};
use anyhow::{Context, Result as AnyhowResult};

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let tokenizer = load_tokenizer(&cmd.tokenizer, false)?;
    let input = read_input(cmd.input)?;

    let ids: Vec<u32> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .with_context(|| format!("invalid token ID '{}'", s))
        })
        .collect::<AnyhowResult<Vec<_>>>()?;

    println!("{}", tokenizer.decode(&ids));

    Ok(())
}
