//! Unicode normalization for pre-tokenization.
//!
//! Composition, case folding and accent stripping applied to text before it
//! is split into words.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationForm {
    /// Canonical composition
    #[default]
    NFC,
    /// No normalization
    None,
}

/// Unicode normalizer.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    /// Normalization form to apply
    form: NormalizationForm,
    lowercase: bool,
    strip_accents: bool,
}

impl Normalizer {
    /// Create a new normalizer.
    pub fn new(form: NormalizationForm) -> Self {
        Self {
            form,
            lowercase: false,
            strip_accents: false,
        }
    }

    /// Create an NFC normalizer (default).
    ///
    /// Repairs text that arrives with decomposed accents so that the same
    /// word always reaches the merge loop in one spelling.
    pub fn nfc() -> Self {
        Self::new(NormalizationForm::NFC)
    }

    /// Lowercase and strip accents, leaving composition alone.
    pub fn lowercase_strip_accents() -> Self {
        Self {
            form: NormalizationForm::None,
            lowercase: true,
            strip_accents: true,
        }
    }

    /// Normalize text.
    pub fn normalize(&self, text: &str) -> String {
        let mut text = match self.form {
            NormalizationForm::NFC => text.nfc().collect(),
            NormalizationForm::None => text.to_string(),
        };
        if self.lowercase {
            text = text.to_lowercase();
        }
        if self.strip_accents {
            text = strip_accents(&text);
        }
        text
    }
}

/// Decompose and drop combining marks (`"café"` -> `"cafe"`).
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|&c| !is_combining_mark(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc_normalization() {
        let normalizer = Normalizer::nfc();
        // Combining characters
        let text = "e\u{0301}"; // e + combining acute accent
        let result = normalizer.normalize(text);
        assert_eq!(result, "\u{00e9}"); // é as single character
    }

    #[test]
    fn test_lowercase_strip_accents() {
        let normalizer = Normalizer::lowercase_strip_accents();
        assert_eq!(normalizer.normalize("Crème BRÛLÉE"), "creme brulee");
    }

    #[test]
    fn test_strip_accents_keeps_plain_text() {
        assert_eq!(strip_accents("naïve"), "naive");
        assert_eq!(strip_accents("plain"), "plain");
    }
}
