//! Standardizing pre-segmentation.
//!
//! The default strategy: repair the text's Unicode composition, standardize
//! punctuation and whitespace, split on Unicode word boundaries and lowercase
//! each word. Newlines survive as `"\n"` words.

use super::normalize::Normalizer;
use super::split::Splitter;
use super::standardize::standardize;
use super::PreSegmenter;

/// Standardizing segmenter.
#[derive(Debug, Clone)]
pub struct StandardizingNormalizer {
    /// Applied to the raw text before standardization
    fixer: Normalizer,
    splitter: Splitter,
}

impl StandardizingNormalizer {
    pub fn new() -> Self {
        Self {
            fixer: Normalizer::nfc(),
            splitter: Splitter::word_bounds(),
        }
    }
}

impl Default for StandardizingNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PreSegmenter for StandardizingNormalizer {
    fn pre_segment(&self, text: &str) -> Vec<String> {
        let text = standardize(&self.fixer.normalize(text));
        self.splitter
            .split(&text)
            .into_iter()
            .map(str::to_lowercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits_punctuation() {
        let segmenter = StandardizingNormalizer::new();
        assert_eq!(
            segmenter.pre_segment("Hello, World!"),
            vec!["hello", ",", "world", "!"]
        );
    }

    #[test]
    fn test_keeps_contractions_and_newlines() {
        let segmenter = StandardizingNormalizer::new();
        assert_eq!(
            segmenter.pre_segment("Don't\n\nstop"),
            vec!["don't", "\n", "stop"]
        );
    }

    #[test]
    fn test_repairs_decomposed_accents() {
        let segmenter = StandardizingNormalizer::new();
        assert_eq!(segmenter.pre_segment("Cafe\u{301}"), vec!["caf\u{e9}"]);
    }

    #[test]
    fn test_typographic_punctuation() {
        let segmenter = StandardizingNormalizer::new();
        assert_eq!(
            segmenter.pre_segment("yes\u{2014}no\u{2026}"),
            vec!["yes", "-", "no", ".", ".", "."]
        );
    }

    #[test]
    fn test_marks_after_space_do_not_carry_the_space() {
        let segmenter = StandardizingNormalizer::new();
        assert_eq!(segmenter.pre_segment("a \u{301}b"), vec!["a", "\u{301}", "b"]);
        assert_eq!(segmenter.pre_segment("x \u{200D}y"), vec!["x", "\u{200D}", "y"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(StandardizingNormalizer::new().pre_segment("  \t ").is_empty());
    }
}
