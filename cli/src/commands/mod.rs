//! CLI commands for the gptbpe tokenizer.

pub mod decode;
pub mod encode;
pub mod export;
pub mod inspect;
pub mod tokenize;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use export::ExportCommand;
pub use inspect::InspectCommand;
pub use tokenize::TokenizeCommand;

use anyhow::{Context, Result as AnyhowResult};
use gptbpe_tokenizer::pre_tokenizer::Segmentation;
use gptbpe_tokenizer::{Tokenizer, TokenizerConfig, TokenizerLoader};
use std::io::Read;
use std::path::Path;

/// Load a tokenizer directory, optionally forcing the basic segmentation.
pub(crate) fn load_tokenizer(dir: &str, basic: bool) -> AnyhowResult<Tokenizer> {
    let dir = Path::new(dir);
    let tokenizer = if basic {
        let config = TokenizerLoader::load_config(dir)?.unwrap_or_default();
        Tokenizer::from_files(
            &dir.join(gptbpe_tokenizer::io::VOCAB_FILE),
            &dir.join(gptbpe_tokenizer::io::MERGES_FILE),
            TokenizerConfig {
                segmentation: Segmentation::BasicWhitespace,
                ..config
            },
        )
    } else {
        Tokenizer::load(dir)
    };
    tokenizer.with_context(|| format!("failed to load tokenizer from {}", dir.display()))
}

/// Read input text, from stdin if "-".
pub(crate) fn read_input(input: String) -> AnyhowResult<String> {
    if input != "-" {
        return Ok(input);
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}
