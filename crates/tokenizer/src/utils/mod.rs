//! Utility modules for the BPE tokenizer.
//!
//! This module contains the per-tokenizer word cache.

pub mod cache;

pub use cache::{CacheStats, WordCache};
