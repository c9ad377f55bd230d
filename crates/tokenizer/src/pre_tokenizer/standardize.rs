//! Punctuation and whitespace standardization.
//!
//! Folds typographic punctuation to ASCII, pads symbol runs with spaces and
//! squeezes whitespace, so that the word segmenter sees punctuation as
//! separate words. The substitution patterns match the ones the published
//! GPT vocabularies were built with; changing them moves token boundaries.

use regex::Regex;
use std::sync::OnceLock;

/// Characters folded to ASCII before any pattern is applied.
const REPLACEMENTS: &[(char, &str)] = &[
    ('\u{2014}', "-"),   // em dash
    ('\u{2013}', "-"),   // en dash
    ('\u{2015}', "-"),   // horizontal bar
    ('\u{2026}', "..."), // ellipsis
    ('\u{00B4}', "'"),   // acute accent
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
];

fn symbol_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(-+|~+|!+|"+|;+|\?+|\++|,+|\)+|\(+|\\+|/+|\*+|\[+|\]+|\}+|\{+|\|+|_+)"#)
            .expect("symbol run pattern is valid")
    })
}

fn newlines() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\n\s*").expect("newline pattern is valid"))
}

fn blanks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\S\n]+").expect("blank pattern is valid"))
}

/// Standardize raw text before segmentation.
///
/// Pure function; the order of the steps matters.
pub fn standardize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match REPLACEMENTS.iter().find(|&&(from, _)| from == c) {
            Some(&(_, to)) => folded.push_str(to),
            None => folded.push(c),
        }
    }

    let padded = symbol_runs().replace_all(&folded, " ${1} ");
    let lines = newlines().replace_all(&padded, " \n ");
    let squeezed = blanks().replace_all(&lines, " ");
    squeezed.trim().to_string()
}
