//! File formats for tokenizer serialization.
//!
//! A tokenizer directory holds three files:
//! - `vocab.json`: JSON object mapping token -> ID
//! - `merges.txt`: a `#version` header, then one `left right` pair per line
//!   in rank order
//! - `tokenizer_config.json`: optional [`TokenizerConfig`](crate::TokenizerConfig)

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Vocabulary file name.
pub const VOCAB_FILE: &str = "vocab.json";

/// Merges file name.
pub const MERGES_FILE: &str = "merges.txt";

/// Tokenizer configuration file name.
pub const CONFIG_FILE: &str = "tokenizer_config.json";

/// First line of every merges file written by this crate.
pub const MERGES_HEADER: &str = "#version: 0.2";

/// Vocabulary as read from disk.
pub type VocabJson = std::collections::HashMap<String, u32>;

/// Vocabulary entries serialized as a JSON object in the given order.
///
/// `serde_json` maps sort keys alphabetically; writing entries in ID order
/// keeps exported files diffable against the originals.
pub struct OrderedVocab<'a>(pub &'a [(&'a str, u32)]);

impl Serialize for OrderedVocab<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (token, id) in self.0 {
            map.serialize_entry(token, id)?;
        }
        map.end()
    }
}

/// Format one merge line.
pub fn merge_line(left: &str, right: &str) -> String {
    format!("{} {}", left, right)
}
