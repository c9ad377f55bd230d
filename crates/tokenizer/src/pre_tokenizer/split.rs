//! Text splitting for pre-tokenization.
//!
//! Splits normalized text into the words handed to the BPE model. Words never
//! contain spaces; the only whitespace that survives as a word is a bare
//! newline under [`SplitPattern::WordBounds`].

use unicode_segmentation::UnicodeSegmentation;

/// Text splitter for pre-tokenization.
#[derive(Debug, Clone, Copy)]
pub struct Splitter {
    /// Pattern to split on
    pattern: SplitPattern,
}

/// Splitting patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPattern {
    /// Split on whitespace
    Whitespace,
    /// Unicode word boundaries (UAX #29); line breaks are kept as `"\n"` words
    WordBounds,
}

impl Splitter {
    /// Create a new splitter.
    pub fn new(pattern: SplitPattern) -> Self {
        Self { pattern }
    }

    /// Create a whitespace splitter.
    pub fn whitespace() -> Self {
        Self::new(SplitPattern::Whitespace)
    }

    /// Create a word-boundary splitter.
    pub fn word_bounds() -> Self {
        Self::new(SplitPattern::WordBounds)
    }

    /// Split text into words.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self.pattern {
            SplitPattern::Whitespace => text.split_whitespace().collect(),
            SplitPattern::WordBounds => {
                let mut words = Vec::new();
                for segment in text.split_word_bounds() {
                    if segment.chars().all(char::is_whitespace) {
                        if segment.contains('\n') {
                            words.push("\n");
                        }
                        continue;
                    }
                    // Extend and format characters attach to a preceding space
                    // (WB4), so a segment can still carry whitespace.
                    words.extend(segment.split_whitespace());
                }
                words
            }
        }
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::word_bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_split() {
        let splitter = Splitter::whitespace();
        let result = splitter.split("hello world  test");
        assert_eq!(result, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_word_bounds_split_punctuation() {
        let splitter = Splitter::word_bounds();
        let result = splitter.split("hello , world. don't");
        assert_eq!(result, vec!["hello", ",", "world", ".", "don't"]);
    }

    #[test]
    fn test_word_bounds_keeps_newlines() {
        let splitter = Splitter::word_bounds();
        let result = splitter.split("one \n two");
        assert_eq!(result, vec!["one", "\n", "two"]);
    }

    #[test]
    fn test_word_bounds_keeps_numbers_whole() {
        let splitter = Splitter::word_bounds();
        assert_eq!(splitter.split("3.14 apples"), vec!["3.14", "apples"]);
    }

    #[test]
    fn test_word_bounds_strip_space_before_marks() {
        let splitter = Splitter::word_bounds();
        // Combining acute accent after a space
        assert_eq!(splitter.split("a \u{301}b"), vec!["a", "\u{301}", "b"]);
        // Zero width joiner after a space
        assert_eq!(splitter.split("x \u{200D}y"), vec!["x", "\u{200D}", "y"]);
        // Format character after a space
        assert_eq!(splitter.split("p \u{200B}q"), vec!["p", "\u{200B}", "q"]);
    }

    #[test]
    fn test_word_bounds_never_yield_spaces() {
        let splitter = Splitter::word_bounds();
        let text = "one \u{301}\u{301} two\u{a0}\u{200D} \n\u{301} three";
        for word in splitter.split(text) {
            assert!(!word.is_empty());
            assert!(word == "\n" || !word.chars().any(char::is_whitespace), "{:?}", word);
        }
    }

    #[test]
    fn test_empty_string() {
        assert!(Splitter::whitespace().split("").is_empty());
        assert!(Splitter::word_bounds().split("   ").is_empty());
    }
}
