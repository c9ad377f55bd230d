//! Load functionality for pre-trained tokenizers.
//!
//! This module reads vocabulary, merges and configuration files from disk.

use super::format::{VocabJson, CONFIG_FILE, MERGES_FILE, VOCAB_FILE};
use crate::tokenizer::TokenizerConfig;
use gptbpe_core::{MergeRanks, Result, TokenizerError, Vocabulary};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Tokenizer loader - handles loading pretrained files.
pub struct TokenizerLoader;

impl TokenizerLoader {
    /// Load a `vocab.json` style token -> ID mapping.
    pub fn load_vocab(path: &Path) -> Result<Vocabulary> {
        let file = File::open(path).map_err(|e| TokenizerError::io(path, e))?;
        let reader = BufReader::new(file);
        let vocab_map: VocabJson = serde_json::from_reader(reader).map_err(|e| {
            TokenizerError::Load(format!(
                "Failed to deserialize vocab {}: {}",
                path.display(),
                e
            ))
        })?;

        let vocab = Vocabulary::from_map(vocab_map)?;
        debug!(path = %path.display(), size = vocab.len(), "loaded vocabulary");
        Ok(vocab)
    }

    /// Load a `merges.txt` style merge list.
    pub fn load_merges(path: &Path) -> Result<MergeRanks> {
        let content = std::fs::read_to_string(path).map_err(|e| TokenizerError::io(path, e))?;
        let merges = Self::parse_merges(&content)?;
        debug!(path = %path.display(), count = merges.len(), "loaded merges");
        Ok(merges)
    }

    /// Parse merges file content.
    ///
    /// The first line is the version header and is always skipped. Blank
    /// lines are ignored; every other line must hold exactly two symbols.
    /// Ranks count the accepted lines from 0.
    pub fn parse_merges(content: &str) -> Result<MergeRanks> {
        let mut merges = MergeRanks::with_capacity(content.lines().count());
        let mut rank = 0u32;

        for (line_num, line) in content.lines().enumerate().skip(1) {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let mut parts = line.split_whitespace();
            let (Some(left), Some(right), None) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(TokenizerError::InvalidMerge {
                    line: line_num + 1,
                    content: line.to_string(),
                });
            };

            merges.add_merge(left, right, rank);
            rank += 1;
        }

        Ok(merges)
    }

    /// Load `tokenizer_config.json` from a directory, `None` if absent.
    pub fn load_config(dir: &Path) -> Result<Option<TokenizerConfig>> {
        let path = dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        let file = File::open(&path).map_err(|e| TokenizerError::io(&path, e))?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(config))
    }

    /// Load vocabulary and merges from a directory.
    ///
    /// Expects `vocab.json` and `merges.txt` in the given directory.
    pub fn load_dir(dir: &Path) -> Result<(Vocabulary, MergeRanks)> {
        let vocab = Self::load_vocab(&dir.join(VOCAB_FILE))?;
        let merges = Self::load_merges(&dir.join(MERGES_FILE))?;
        Ok((vocab, merges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_merges_skips_header() {
        let merges =
            TokenizerLoader::parse_merges("#version: 0.2\nl o\nlo w\ne r</w>\n").unwrap();

        assert_eq!(merges.len(), 3);
        assert_eq!(merges.rank("l", "o"), Some(0));
        assert_eq!(merges.rank("lo", "w"), Some(1));
        assert_eq!(merges.rank("e", "r</w>"), Some(2));
    }

    #[test]
    fn test_parse_merges_skips_blank_lines() {
        let merges = TokenizerLoader::parse_merges("#version: 0.2\n\nl o\r\n\nlo w").unwrap();

        assert_eq!(merges.rank("l", "o"), Some(0));
        assert_eq!(merges.rank("lo", "w"), Some(1));
    }

    #[test]
    fn test_parse_merges_rejects_bad_line() {
        let err = TokenizerLoader::parse_merges("#version: 0.2\nl o\nlow\n").unwrap_err();
        match err {
            TokenizerError::InvalidMerge { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "low");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(TokenizerLoader::parse_merges("#version: 0.2\na b c\n").is_err());
    }

    #[test]
    fn test_load_vocab_missing_file() {
        let err = TokenizerLoader::load_vocab(Path::new("/nonexistent/vocab.json")).unwrap_err();
        assert!(matches!(err, TokenizerError::Io { .. }));
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(VOCAB_FILE), r#"{"l": 0, "o": 1, "lo": 2}"#).unwrap();
        std::fs::write(dir.path().join(MERGES_FILE), "#version: 0.2\nl o\n").unwrap();

        let (vocab, merges) = TokenizerLoader::load_dir(dir.path()).unwrap();
        assert_eq!(vocab.get_id("lo"), Some(2));
        assert_eq!(vocab.get_token(1), Some("o"));
        assert_eq!(merges.rank("l", "o"), Some(0));
        assert!(TokenizerLoader::load_config(dir.path()).unwrap().is_none());
    }
}
