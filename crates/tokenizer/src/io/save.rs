//! Save functionality for tokenizers.
//!
//! This module writes the vocabulary and merges back to disk in the same
//! formats the loader reads.

use super::format::{merge_line, OrderedVocab, CONFIG_FILE, MERGES_FILE, MERGES_HEADER, VOCAB_FILE};
use crate::tokenizer::TokenizerConfig;
use gptbpe_core::{MergeRanks, Result, TokenizerError, Vocabulary};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Tokenizer saver - handles exporting vocabulary and merges.
pub struct TokenizerSaver<'a> {
    /// Vocabulary reference
    vocab: &'a Vocabulary,
    /// Merge rules reference
    merges: &'a MergeRanks,
}

impl<'a> TokenizerSaver<'a> {
    /// Create a new tokenizer saver.
    pub fn new(vocab: &'a Vocabulary, merges: &'a MergeRanks) -> Self {
        Self { vocab, merges }
    }

    /// Write `vocab.json` then `merges.txt` into an existing directory.
    ///
    /// Returns the two file paths. A failure while writing the merges leaves
    /// the vocabulary file in place.
    pub fn save_vocabulary(&self, dir: &Path) -> Result<(PathBuf, PathBuf)> {
        if !dir.is_dir() {
            return Err(TokenizerError::NotADirectory(dir.to_path_buf()));
        }

        let vocab_path = dir.join(VOCAB_FILE);
        self.write_vocab(&vocab_path)?;

        let merges_path = dir.join(MERGES_FILE);
        self.write_merges(&merges_path)?;

        debug!(
            dir = %dir.display(),
            vocab_size = self.vocab.len(),
            merge_count = self.merges.len(),
            "saved vocabulary"
        );
        Ok((vocab_path, merges_path))
    }

    fn write_vocab(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| TokenizerError::io(path, e))?;
        let mut writer = BufWriter::new(file);

        let entries = self.vocab.sorted_entries();
        serde_json::to_writer(&mut writer, &OrderedVocab(&entries))
            .map_err(|e| TokenizerError::Save(format!("Failed to serialize vocab: {}", e)))?;
        writer.flush().map_err(|e| TokenizerError::io(path, e))
    }

    fn write_merges(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| TokenizerError::io(path, e))?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{}", MERGES_HEADER).map_err(|e| TokenizerError::io(path, e))?;

        let mut index = 0u32;
        for (left, right, rank) in self.merges.sorted() {
            if index != rank {
                warn!(
                    path = %path.display(),
                    expected = index,
                    found = rank,
                    "BPE merge indices are not consecutive, check that the tokenizer is not corrupted"
                );
                index = rank;
            }
            writeln!(writer, "{}", merge_line(left, right))
                .map_err(|e| TokenizerError::io(path, e))?;
            index += 1;
        }

        writer.flush().map_err(|e| TokenizerError::io(path, e))
    }

    /// Write `tokenizer_config.json` into `dir`.
    pub fn save_config(config: &TokenizerConfig, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(CONFIG_FILE);
        let file = File::create(&path).map_err(|e| TokenizerError::io(&path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, config)
            .map_err(|e| TokenizerError::Save(format!("Failed to serialize config: {}", e)))?;
        writer.flush().map_err(|e| TokenizerError::io(&path, e))?;
        Ok(path)
    }
}
