//! Encode command implementation.

use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Directory holding vocab.json and merges.txt
    #[arg(short, long)]
    pub tokenizer: String,

    /// Text to encode ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Use the basic whitespace segmentation
    #[arg(long, default_value_t = false)]
    pub basic: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

use super::{load_tokenizer, read_input};
use anyhow::Result as AnyhowResult;
use tracing::info;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let tokenizer = load_tokenizer(&cmd.tokenizer, cmd.basic)?;
    let input_text = read_input(cmd.input)?;

    let encoding = tokenizer.encode(&input_text)?;

    let ids_str: Vec<String> = encoding.ids.iter().map(|id| id.to_string()).collect();
    let output = ids_str.join(" ");

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            info!(tokens = encoding.len(), path = %path, "wrote encoding");
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
