//! Inspect command implementation.

use clap::Parser;

/// Inspect command arguments.
#[derive(Parser)]
pub struct InspectCommand {
    /// Directory holding vocab.json and merges.txt
    #[arg(short, long)]
    pub tokenizer: String,
}

use super::load_tokenizer;
use anyhow::Result as AnyhowResult;

pub fn run(cmd: InspectCommand) -> AnyhowResult<()> {
    let tokenizer = load_tokenizer(&cmd.tokenizer, false)?;
    let stats = tokenizer.merges().stats();

    println!("Tokenizer: {}", cmd.tokenizer);
    println!("  Vocabulary size: {}", tokenizer.vocab_size());
    println!(
        "  Unknown token: {} (id {})",
        tokenizer.unk_token(),
        tokenizer.token_to_id(tokenizer.unk_token())
    );
    println!("  Merges: {}", stats.count);
    println!("  Rank range: {}..={}", stats.min_rank, stats.max_rank);
    println!("  Consecutive ranks: {}", stats.consecutive);
    println!("  Segmentation: {:?}", tokenizer.config().segmentation);

    Ok(())
}
