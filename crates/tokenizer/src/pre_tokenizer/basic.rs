//! Whitespace-and-punctuation pre-segmentation.
//!
//! The lighter of the two strategies: cleans control characters, spaces out
//! CJK ideographs, splits on whitespace, lowercases and strips accents, and
//! cuts every punctuation character into its own word.

use super::normalize::Normalizer;
use super::split::Splitter;
use super::PreSegmenter;
use ahash::AHashSet;
use regex::Regex;
use std::sync::OnceLock;

fn punctuation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // ASCII symbol ranges count as punctuation too ("$", "^", "`").
    RE.get_or_init(|| Regex::new(r"[\p{P}!-/:-@\[-`{-~]").expect("punctuation pattern is valid"))
}

fn other_category() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Control, format, surrogate, private-use and unassigned code points.
    RE.get_or_init(|| Regex::new(r"\p{C}").expect("category pattern is valid"))
}

/// Basic whitespace segmenter.
#[derive(Debug, Clone)]
pub struct BasicWhitespaceNormalizer {
    /// Words passed through untouched (no lowercasing or splitting)
    never_split: AHashSet<String>,
    normalizer: Normalizer,
    splitter: Splitter,
}

impl BasicWhitespaceNormalizer {
    pub fn new<I, S>(never_split: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            never_split: never_split.into_iter().map(Into::into).collect(),
            normalizer: Normalizer::lowercase_strip_accents(),
            splitter: Splitter::whitespace(),
        }
    }

    /// Map all whitespace to spaces, then drop invalid characters and every
    /// code point in the Unicode "Other" categories (`Cc`, `Cf`, ...).
    fn clean(text: &str) -> String {
        let spaced: String = text
            .chars()
            .filter(|&c| c != '\u{FFFD}')
            .map(|c| if c.is_whitespace() { ' ' } else { c })
            .collect();
        other_category().replace_all(&spaced, "").into_owned()
    }

    /// Surround CJK ideographs with spaces so each becomes its own word.
    fn space_cjk(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if is_cjk(c) {
                out.push(' ');
                out.push(c);
                out.push(' ');
            } else {
                out.push(c);
            }
        }
        out
    }

    fn split_punctuation(word: &str, out: &mut Vec<String>) {
        let mut last = 0;
        for m in punctuation().find_iter(word) {
            if m.start() > last {
                out.push(word[last..m.start()].to_string());
            }
            out.push(m.as_str().to_string());
            last = m.end();
        }
        if last < word.len() {
            out.push(word[last..].to_string());
        }
    }
}

impl Default for BasicWhitespaceNormalizer {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

impl PreSegmenter for BasicWhitespaceNormalizer {
    fn pre_segment(&self, text: &str) -> Vec<String> {
        let text = Self::space_cjk(&Self::clean(text));

        let mut words = Vec::new();
        for word in self.splitter.split(&text) {
            if self.never_split.contains(word) {
                words.push(word.to_string());
                continue;
            }
            let word = self.normalizer.normalize(word);
            Self::split_punctuation(&word, &mut words);
        }
        words
    }
}

/// CJK Unified Ideographs blocks (not Hangul, Hiragana or Katakana, which are
/// written with spaces).
fn is_cjk(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF
            | 0x3400..=0x4DBF
            | 0x20000..=0x2A6DF
            | 0x2A700..=0x2B73F
            | 0x2B740..=0x2B81F
            | 0x2B820..=0x2CEAF
            | 0xF900..=0xFAFF
            | 0x2F800..=0x2FA1F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_punctuation() {
        let segmenter = BasicWhitespaceNormalizer::default();
        assert_eq!(
            segmenter.pre_segment("Hello, World!"),
            vec!["hello", ",", "world", "!"]
        );
    }

    #[test]
    fn test_every_punctuation_char_is_a_word() {
        let segmenter = BasicWhitespaceNormalizer::default();
        assert_eq!(
            segmenter.pre_segment("don't...$5"),
            vec!["don", "'", "t", ".", ".", ".", "$", "5"]
        );
    }

    #[test]
    fn test_strips_accents() {
        let segmenter = BasicWhitespaceNormalizer::default();
        assert_eq!(segmenter.pre_segment("Café naïve"), vec!["cafe", "naive"]);
    }

    #[test]
    fn test_control_and_whitespace_cleanup() {
        let segmenter = BasicWhitespaceNormalizer::default();
        assert_eq!(
            segmenter.pre_segment("a\u{0}b\tc\nd\u{7}e"),
            vec!["ab", "c", "de"]
        );
    }

    #[test]
    fn test_format_characters_removed() {
        let segmenter = BasicWhitespaceNormalizer::default();
        // Zero width space, soft hyphen, zero width joiner
        assert_eq!(
            segmenter.pre_segment("a\u{200B}b co\u{AD}op x\u{200D}y"),
            vec!["ab", "coop", "xy"]
        );
    }

    #[test]
    fn test_lone_combining_mark_yields_no_word() {
        let segmenter = BasicWhitespaceNormalizer::default();
        assert_eq!(segmenter.pre_segment("a \u{301}b"), vec!["a", "b"]);
        assert!(segmenter.pre_segment(" \u{301} ").is_empty());
    }

    #[test]
    fn test_cjk_split() {
        let segmenter = BasicWhitespaceNormalizer::default();
        assert_eq!(segmenter.pre_segment("ab中文cd"), vec!["ab", "中", "文", "cd"]);
    }

    #[test]
    fn test_never_split() {
        let segmenter = BasicWhitespaceNormalizer::new(["<unk>"]);
        assert_eq!(
            segmenter.pre_segment("Say <unk> now"),
            vec!["say", "<unk>", "now"]
        );
    }
}
