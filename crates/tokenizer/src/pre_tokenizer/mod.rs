//! Pre-tokenization pipeline.
//!
//! This module turns raw text into the lowercased words that the BPE model
//! consumes. Two strategies are available behind the [`PreSegmenter`] trait
//! and one is chosen when the tokenizer is built.

pub mod basic;
pub mod normalize;
pub mod split;
pub mod standard;
pub mod standardize;

pub use basic::BasicWhitespaceNormalizer;
pub use normalize::{NormalizationForm, Normalizer};
pub use split::{SplitPattern, Splitter};
pub use standard::StandardizingNormalizer;
pub use standardize::standardize;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Splits raw text into words for BPE.
///
/// Implementations must never return words containing spaces or empty words.
pub trait PreSegmenter: Send + Sync {
    fn pre_segment(&self, text: &str) -> Vec<String>;
}

/// Pre-segmentation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segmentation {
    /// NFC repair, punctuation standardization, Unicode word boundaries
    #[default]
    Standardizing,
    /// Control-character cleanup, whitespace split, accent stripping,
    /// per-character punctuation split
    BasicWhitespace,
}

impl Segmentation {
    /// Instantiate the strategy.
    ///
    /// `never_split` only affects [`Segmentation::BasicWhitespace`].
    pub fn build(self, never_split: &[String]) -> Arc<dyn PreSegmenter> {
        match self {
            Segmentation::Standardizing => Arc::new(StandardizingNormalizer::new()),
            Segmentation::BasicWhitespace => {
                Arc::new(BasicWhitespaceNormalizer::new(never_split.iter().cloned()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategies_differ_on_contractions() {
        let standard = Segmentation::Standardizing.build(&[]);
        let basic = Segmentation::BasicWhitespace.build(&[]);

        assert_eq!(standard.pre_segment("it's"), vec!["it's"]);
        assert_eq!(basic.pre_segment("it's"), vec!["it", "'", "s"]);
    }

    #[test]
    fn test_segmentation_serde_names() {
        let json = serde_json::to_string(&Segmentation::BasicWhitespace).unwrap();
        assert_eq!(json, "\"basic_whitespace\"");
        let parsed: Segmentation = serde_json::from_str("\"standardizing\"").unwrap();
        assert_eq!(parsed, Segmentation::Standardizing);
    }
}
