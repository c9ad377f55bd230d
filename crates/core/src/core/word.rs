//! Greedy pairwise merging of a single word.
//!
//! A word starts as its characters, with the end-of-word marker glued onto the
//! last one. The adjacent pair with the lowest merge rank is joined everywhere
//! it occurs, and this repeats until one symbol remains or no adjacent pair is
//! a known merge.

use crate::core::merges::MergeRanks;
use compact_str::CompactString;

/// Marker appended to the final symbol of every word.
pub const END_OF_WORD: &str = "</w>";

/// A word as an ordered sequence of symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    symbols: Vec<CompactString>,
}

impl Word {
    /// Split a word into characters, marking the last one with [`END_OF_WORD`].
    ///
    /// An empty input gives an empty word.
    pub fn from_token(token: &str) -> Self {
        let mut symbols: Vec<CompactString> = token
            .chars()
            .map(|c| {
                let mut buf = [0u8; 4];
                CompactString::new(c.encode_utf8(&mut buf))
            })
            .collect();
        if let Some(last) = symbols.last_mut() {
            last.push_str(END_OF_WORD);
        }
        Self { symbols }
    }

    /// Current symbols.
    #[inline]
    pub fn symbols(&self) -> &[CompactString] {
        &self.symbols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Index of the adjacent pair with the lowest rank.
    ///
    /// Equal ranks resolve to the leftmost pair.
    fn best_pair(&self, ranks: &MergeRanks) -> Option<usize> {
        let mut best: Option<(u32, usize)> = None;
        for (i, window) in self.symbols.windows(2).enumerate() {
            if let Some(rank) = ranks.rank(&window[0], &window[1]) {
                if best.map_or(true, |(best_rank, _)| rank < best_rank) {
                    best = Some((rank, i));
                }
            }
        }
        best.map(|(_, i)| i)
    }

    /// Join every non-overlapping `left right` occurrence, scanning left to right.
    pub fn merge(&mut self, left: &str, right: &str) {
        let mut merged = Vec::with_capacity(self.symbols.len());
        let mut i = 0;
        while i < self.symbols.len() {
            if i + 1 < self.symbols.len()
                && self.symbols[i] == left
                && self.symbols[i + 1] == right
            {
                let mut joined = self.symbols[i].clone();
                joined.push_str(&self.symbols[i + 1]);
                merged.push(joined);
                i += 2;
            } else {
                merged.push(self.symbols[i].clone());
                i += 1;
            }
        }
        self.symbols = merged;
    }

    /// Apply merges until a single symbol remains or nothing else can merge.
    pub fn apply_merges(&mut self, ranks: &MergeRanks) {
        while self.symbols.len() > 1 {
            let Some(i) = self.best_pair(ranks) else {
                break;
            };
            let left = self.symbols[i].clone();
            let right = self.symbols[i + 1].clone();
            self.merge(&left, &right);
        }
    }

    /// Symbols joined by single spaces.
    ///
    /// A bare newline word whose marker got separated (`"\n  </w>"`) is folded
    /// back into `"\n</w>"`.
    pub fn joined(&self) -> String {
        let joined = self
            .symbols
            .iter()
            .map(CompactString::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        if joined == "\n  </w>" {
            return "\n</w>".to_string();
        }
        joined
    }
}

/// Run BPE over one pre-segmented word and return the space-joined symbols.
pub fn bpe_word(token: &str, ranks: &MergeRanks) -> String {
    let mut word = Word::from_token(token);
    word.apply_merges(ranks);
    word.joined()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower_ranks() -> MergeRanks {
        MergeRanks::from_pairs([("l", "o"), ("lo", "w"), ("e", "r</w>")])
    }

    #[test]
    fn test_from_token_marks_last_symbol() {
        let word = Word::from_token("low");
        assert_eq!(word.symbols(), &["l", "o", "w</w>"]);
    }

    #[test]
    fn test_from_token_multibyte() {
        let word = Word::from_token("né");
        assert_eq!(word.symbols(), &["n", "é</w>"]);
    }

    #[test]
    fn test_from_token_empty() {
        let word = Word::from_token("");
        assert!(word.is_empty());
        assert_eq!(word.joined(), "");
    }

    #[test]
    fn test_lower() {
        assert_eq!(bpe_word("lower", &lower_ranks()), "low er</w>");
    }

    #[test]
    fn test_single_character() {
        assert_eq!(bpe_word("a", &lower_ranks()), "a</w>");
    }

    #[test]
    fn test_no_known_pairs() {
        assert_eq!(bpe_word("xyz", &lower_ranks()), "x y z</w>");
    }

    #[test]
    fn test_merge_leftmost_non_overlapping() {
        let mut word = Word::from_token("aaab");
        word.merge("a", "a");
        assert_eq!(word.symbols(), &["aa", "a", "b</w>"]);
    }

    #[test]
    fn test_merge_all_occurrences() {
        let mut word = Word::from_token("abab");
        word.merge("a", "b");
        assert_eq!(word.symbols(), &["ab", "a", "b</w>"]);
    }

    #[test]
    fn test_rank_order_beats_position() {
        // "b c</w>" outranks "a b", so it merges first and "a b" never forms.
        let ranks = MergeRanks::from_pairs([("b", "c</w>"), ("a", "b")]);
        assert_eq!(bpe_word("abc", &ranks), "a bc</w>");

        // Word-internal "b c" is a different pair from word-final "b c</w>".
        let ranks = MergeRanks::from_pairs([("b", "c"), ("a", "b")]);
        assert_eq!(bpe_word("abc", &ranks), "ab c</w>");
    }

    #[test]
    fn test_collapses_to_single_symbol() {
        let ranks = MergeRanks::from_pairs([("l", "o"), ("lo", "w</w>")]);
        assert_eq!(bpe_word("low", &ranks), "low</w>");
    }

    #[test]
    fn test_newline_marker_folded() {
        let word = Word {
            symbols: vec!["\n".into(), "".into(), "</w>".into()],
        };
        assert_eq!(word.joined(), "\n</w>");
    }

    #[test]
    fn test_round_trip_reconstructs_word() {
        let ranks = lower_ranks();
        for input in ["lower", "low", "slow", "owl", "rerere"] {
            let joined = bpe_word(input, &ranks);
            let rebuilt: String = joined.split(' ').collect::<String>().replace(END_OF_WORD, "");
            assert_eq!(rebuilt, input);
        }
    }
}
