//! gptbpe-core - Core BPE algorithm implementation
//!
//! This crate provides the fundamental data structures and algorithms for
//! word-level byte-pair encoding with an end-of-word marker, independent of
//! text segmentation and file formats.
//!
//! # Features
//!
//! - Efficient vocabulary storage using `AHashMap` and compact strings
//! - Rank lookups that borrow symbols without allocating
//! - Greedy lowest-rank-first merging of a single word
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use gptbpe_core::{bpe_word, MergeRanks};
//!
//! let ranks = MergeRanks::from_pairs([("l", "o"), ("lo", "w"), ("e", "r</w>")]);
//! assert_eq!(bpe_word("lower", &ranks), "low er</w>");
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Core BPE algorithm modules
pub mod core;
pub use crate::core::{
    bpe_word, MergeMap, MergeRanks, MergeStats, SpecialTokens, Vocab, VocabR, Vocabulary,
    Word, END_OF_WORD,
};
