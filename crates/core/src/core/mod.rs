//! Core BPE algorithm implementation.
//!
//! This module contains the vocabulary, the merge-rank table and the
//! word-level merge loop, independent of how text is segmented into words.

pub mod merges;
pub mod vocab;
pub mod word;

pub use merges::{MergeMap, MergeRanks, MergeStats};
pub use vocab::{SpecialTokens, Vocab, VocabR, Vocabulary};
pub use word::{bpe_word, Word, END_OF_WORD};
