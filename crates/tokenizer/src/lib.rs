//! gptbpe-tokenizer - High-level tokenizer API
//!
//! This crate provides a GPT-style word-level BPE tokenizer: raw text is
//! normalized and split into lowercased words, each word is merged into
//! subword tokens ending in `</w>`, and tokens map to vocabulary IDs.
//!
//! # Features
//!
//! - Builder pattern for tokenizer configuration
//! - Two pre-segmentation strategies (standardizing, basic whitespace)
//! - Per-tokenizer word cache, shareable across threads
//! - Loading and exporting `vocab.json` + `merges.txt`
//!
//! # Example
//!
//! ```rust
//! use gptbpe_tokenizer::{MergeRanks, Tokenizer, Vocabulary};
//!
//! let vocab = Vocabulary::from_map([("low", 0u32), ("er</w>", 1), ("<unk>", 2)])?;
//! let merges = MergeRanks::from_pairs([("l", "o"), ("lo", "w"), ("e", "r</w>")]);
//! let tokenizer = Tokenizer::builder().vocab(vocab).merges(merges).build()?;
//!
//! let encoding = tokenizer.encode("Lower")?;
//! assert_eq!(encoding.tokens, vec!["low", "er</w>"]);
//! assert_eq!(encoding.ids, vec![0, 1]);
//! assert_eq!(tokenizer.decode(&encoding.ids), "lower");
//! # Ok::<(), gptbpe_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use gptbpe_core::{MergeRanks, Result, TokenizerError, Vocabulary, END_OF_WORD};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Encoding, Tokenizer, TokenizerBuilder, TokenizerConfig};

// BPE model
pub mod model;
pub use model::BpeModel;

// IO/Serialization
pub mod io;
pub use io::{TokenizerLoader, TokenizerSaver};

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::{
    standardize, BasicWhitespaceNormalizer, PreSegmenter, Segmentation, StandardizingNormalizer,
};

// Utilities
pub mod utils;
pub use utils::WordCache;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
