//! Tokenize command implementation.

use clap::Parser;

/// Tokenize command arguments.
#[derive(Parser)]
pub struct TokenizeCommand {
    /// Directory holding vocab.json and merges.txt
    #[arg(short, long)]
    pub tokenizer: String,

    /// Text to tokenize ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Use the basic whitespace segmentation
    #[arg(long, default_value_t = false)]
    pub basic: bool,
}

use super::{load_tokenizer, read_input};
use anyhow::Result as AnyhowResult;

pub fn run(cmd: TokenizeCommand) -> AnyhowResult<()> {
    let tokenizer = load_tokenizer(&cmd.tokenizer, cmd.basic)?;
    let text = read_input(cmd.input)?;

    let tokens = tokenizer.tokenize(&text);
    // Newline tokens would break the one-line output.
    let printable: Vec<String> = tokens.iter().map(|t| t.replace('\n', "\\n")).collect();
    println!("{}", printable.join(" "));

    Ok(())
}
