//! Serialization and deserialization for BPE models.
//!
//! This module reads and writes the `vocab.json` + `merges.txt` pair and the
//! optional tokenizer configuration.

pub mod format;
pub mod load;
pub mod save;

pub use format::{CONFIG_FILE, MERGES_FILE, MERGES_HEADER, VOCAB_FILE};
pub use load::TokenizerLoader;
pub use save::TokenizerSaver;
