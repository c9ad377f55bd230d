//! Export command implementation.

use clap::Parser;

/// Export command arguments.
#[derive(Parser)]
pub struct ExportCommand {
    /// Directory holding vocab.json and merges.txt
    #[arg(short, long)]
    pub tokenizer: String,

    /// Existing directory to write into
    #[arg(short, long)]
    pub output: String,

    /// Also write tokenizer_config.json (creates the directory)
    #[arg(long, default_value_t = false)]
    pub with_config: bool,
}

use super::load_tokenizer;
use anyhow::Result as AnyhowResult;
use std::path::Path;
use tracing::info;

pub fn run(cmd: ExportCommand) -> AnyhowResult<()> {
    let tokenizer = load_tokenizer(&cmd.tokenizer, false)?;
    let output = Path::new(&cmd.output);

    if cmd.with_config {
        tokenizer.save(output)?;
        info!(dir = %output.display(), "saved tokenizer");
    } else {
        let (vocab_path, merges_path) = tokenizer.save_vocabulary(output)?;
        info!(
            vocab = %vocab_path.display(),
            merges = %merges_path.display(),
            "exported vocabulary"
        );
    }

    Ok(())
}
