//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that ties together
//! pre-segmentation, the BPE model and vocabulary files.

use crate::io::{TokenizerLoader, TokenizerSaver, MERGES_FILE, VOCAB_FILE};
use crate::model::{BpeModel, DEFAULT_UNK_TOKEN};
use crate::pre_tokenizer::{PreSegmenter, Segmentation};
use crate::utils::CacheStats;
use gptbpe_core::{MergeRanks, Result, TokenizerError, Vocabulary, END_OF_WORD};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Largest input accepted by [`Tokenizer::encode`], in bytes.
pub const MAX_INPUT_BYTES: usize = 1_000_000;

/// Configuration for building a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Token substituted for out-of-vocabulary lookups
    pub unk_token: String,
    /// Pre-segmentation strategy
    pub segmentation: Segmentation,
    /// Words the basic strategy must leave intact
    pub never_split: Vec<String>,
    /// Word cache bound, `None` for unbounded
    pub cache_capacity: Option<usize>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            unk_token: DEFAULT_UNK_TOKEN.to_string(),
            segmentation: Segmentation::default(),
            never_split: Vec::new(),
            cache_capacity: None,
        }
    }
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
    vocab: Option<Vocabulary>,
    merges: Option<MergeRanks>,
    vocab_file: Option<PathBuf>,
    merges_file: Option<PathBuf>,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: TokenizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the unknown token.
    pub fn unk_token(mut self, token: impl Into<String>) -> Self {
        self.config.unk_token = token.into();
        self
    }

    /// Set the pre-segmentation strategy.
    pub fn segmentation(mut self, segmentation: Segmentation) -> Self {
        self.config.segmentation = segmentation;
        self
    }

    /// Set words the basic strategy must not split.
    pub fn never_split<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.never_split = words.into_iter().map(Into::into).collect();
        self
    }

    /// Bound the word cache.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = Some(capacity);
        self
    }

    /// Use an in-memory vocabulary.
    pub fn vocab(mut self, vocab: Vocabulary) -> Self {
        self.vocab = Some(vocab);
        self
    }

    /// Use in-memory merge ranks.
    pub fn merges(mut self, merges: MergeRanks) -> Self {
        self.merges = Some(merges);
        self
    }

    /// Read the vocabulary from a `vocab.json` file.
    pub fn vocab_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.vocab_file = Some(path.into());
        self
    }

    /// Read the merges from a `merges.txt` file.
    pub fn merges_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.merges_file = Some(path.into());
        self
    }

    /// Build the tokenizer.
    ///
    /// In-memory vocabulary and merges win over files. A vocabulary is
    /// required; missing merges mean every word splits into characters.
    pub fn build(self) -> Result<Tokenizer> {
        let vocab = match (self.vocab, self.vocab_file) {
            (Some(vocab), _) => vocab,
            (None, Some(path)) => TokenizerLoader::load_vocab(&path)?,
            (None, None) => {
                return Err(TokenizerError::InvalidConfig(
                    "a vocabulary or vocabulary file is required".to_string(),
                ))
            }
        };
        let merges = match (self.merges, self.merges_file) {
            (Some(merges), _) => merges,
            (None, Some(path)) => TokenizerLoader::load_merges(&path)?,
            (None, None) => MergeRanks::new(),
        };

        Tokenizer::new(vocab, merges, self.config)
    }
}

/// Main tokenizer struct.
///
/// Immutable after construction apart from the internal word cache, so one
/// instance can be shared between threads.
pub struct Tokenizer {
    model: BpeModel,
    segmenter: Arc<dyn PreSegmenter>,
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a tokenizer from a loaded vocabulary and merges.
    pub fn new(vocab: Vocabulary, merges: MergeRanks, config: TokenizerConfig) -> Result<Self> {
        let model = BpeModel::new(vocab, merges, &config.unk_token, config.cache_capacity)?;

        // The unknown token is always protected from splitting.
        let mut never_split = config.never_split.clone();
        if !never_split.contains(&config.unk_token) {
            never_split.push(config.unk_token.clone());
        }
        let segmenter = config.segmentation.build(&never_split);

        Ok(Self {
            model,
            segmenter,
            config,
        })
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Load from explicit vocabulary and merges files.
    pub fn from_files(
        vocab_path: &Path,
        merges_path: &Path,
        config: TokenizerConfig,
    ) -> Result<Self> {
        Self::builder()
            .config(config)
            .vocab_file(vocab_path)
            .merges_file(merges_path)
            .build()
    }

    /// Load a tokenizer from a directory.
    ///
    /// Reads `vocab.json`, `merges.txt` and, when present,
    /// `tokenizer_config.json`.
    pub fn load(dir: &Path) -> Result<Self> {
        let config = TokenizerLoader::load_config(dir)?.unwrap_or_default();
        Self::from_files(&dir.join(VOCAB_FILE), &dir.join(MERGES_FILE), config)
    }

    /// Split text into subword tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.segmenter
            .pre_segment(text)
            .iter()
            .flat_map(|word| self.model.tokenize_word(word))
            .collect()
    }

    /// Token ID, or the unknown token's ID for out-of-vocabulary tokens.
    pub fn token_to_id(&self, token: &str) -> u32 {
        self.model.token_to_id(token)
    }

    /// Token string, or the unknown token for unassigned IDs.
    pub fn id_to_token(&self, id: u32) -> &str {
        self.model.id_to_token(id)
    }

    pub fn convert_tokens_to_ids<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<u32> {
        tokens
            .iter()
            .map(|token| self.token_to_id(token.as_ref()))
            .collect()
    }

    pub fn convert_ids_to_tokens(&self, ids: &[u32]) -> Vec<String> {
        ids.iter()
            .map(|&id| self.id_to_token(id).to_string())
            .collect()
    }

    /// Turn tokens back into text.
    ///
    /// Tokens are concatenated, each end-of-word marker becomes a space and
    /// the result is trimmed.
    pub fn tokens_to_string<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let mut joined = String::new();
        for token in tokens {
            joined.push_str(token.as_ref());
        }
        joined.replace(END_OF_WORD, " ").trim().to_string()
    }

    /// Encode text to tokens and IDs.
    pub fn encode(&self, text: &str) -> Result<Encoding> {
        if text.len() > MAX_INPUT_BYTES {
            return Err(TokenizerError::Tokenization(format!(
                "Text too large: {} bytes (max: {})",
                text.len(),
                MAX_INPUT_BYTES
            )));
        }

        let tokens = self.tokenize(text);
        let ids = self.convert_tokens_to_ids(&tokens);

        Ok(Encoding {
            ids,
            tokens,
            text: text.to_string(),
        })
    }

    /// Encode a batch of texts (parallelized).
    pub fn encode_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Result<Vec<Encoding>> {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.encode(text.as_ref()))
            .collect()
    }

    /// Decode token IDs back to text.
    pub fn decode(&self, ids: &[u32]) -> String {
        let tokens: Vec<&str> = ids.iter().map(|&id| self.id_to_token(id)).collect();
        self.tokens_to_string(&tokens)
    }

    /// Export `vocab.json` and `merges.txt` into an existing directory.
    pub fn save_vocabulary(&self, dir: &Path) -> Result<(PathBuf, PathBuf)> {
        TokenizerSaver::new(self.model.vocab(), self.model.merges()).save_vocabulary(dir)
    }

    /// Save vocabulary, merges and configuration, creating the directory.
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir).map_err(|e| TokenizerError::io(dir, e))?;
        self.save_vocabulary(dir)?;
        TokenizerSaver::save_config(&self.config, dir)?;
        Ok(())
    }

    /// Get the vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.model.vocab().len()
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        self.model.vocab()
    }

    pub fn merges(&self) -> &MergeRanks {
        self.model.merges()
    }

    pub fn unk_token(&self) -> &str {
        self.model.unk_token()
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.model.cache_stats()
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("model", &self.model)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Result of encoding text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    /// Token IDs
    pub ids: Vec<u32>,
    /// Subword tokens, aligned with `ids`
    pub tokens: Vec<String>,
    /// Original text
    pub text: String,
}

impl Encoding {
    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        let vocab = Vocabulary::from_map([
            ("l", 0u32),
            ("o", 1),
            ("w", 2),
            ("e", 3),
            ("r", 4),
            ("lo", 5),
            ("low", 6),
            ("er</w>", 7),
            ("w</w>", 8),
            ("low</w>", 9),
            (",</w>", 10),
            ("<unk>", 11),
        ])
        .unwrap();
        let merges =
            MergeRanks::from_pairs([("l", "o"), ("lo", "w"), ("e", "r</w>"), ("lo", "w</w>")]);
        Tokenizer::builder().vocab(vocab).merges(merges).build().unwrap()
    }

    #[test]
    fn test_builder_requires_vocab() {
        let err = Tokenizer::builder().build().unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidConfig(_)));
    }

    #[test]
    fn test_builder_reports_exhausted_ids() {
        let vocab = Vocabulary::from_map([("a", u32::MAX)]).unwrap();
        let err = Tokenizer::builder().vocab(vocab).build().unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidConfig(_)));
    }

    #[test]
    fn test_tokenize() {
        let tokenizer = tokenizer();
        assert_eq!(
            tokenizer.tokenize("Lower, low"),
            vec!["low", "er</w>", ",</w>", "low</w>"]
        );
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let tokenizer = tokenizer();

        let encoding = tokenizer.encode("lower low").unwrap();
        assert_eq!(encoding.ids, vec![6, 7, 9]);
        assert_eq!(encoding.len(), 3);
        assert_eq!(tokenizer.decode(&encoding.ids), "lower low");
    }

    #[test]
    fn test_unknown_tokens() {
        let tokenizer = tokenizer();

        let encoding = tokenizer.encode("zap").unwrap();
        assert_eq!(encoding.tokens, vec!["z", "a", "p</w>"]);
        assert_eq!(encoding.ids, vec![11, 11, 11]);
        assert_eq!(tokenizer.id_to_token(1234), "<unk>");
    }

    #[test]
    fn test_tokens_to_string() {
        let tokenizer = tokenizer();
        assert_eq!(
            tokenizer.tokens_to_string(&["low", "er</w>", "low</w>"]),
            "lower low"
        );
    }

    #[test]
    fn test_encode_rejects_huge_input() {
        let tokenizer = tokenizer();
        let text = "a".repeat(MAX_INPUT_BYTES + 1);
        assert!(matches!(
            tokenizer.encode(&text),
            Err(TokenizerError::Tokenization(_))
        ));
    }

    #[test]
    fn test_encode_batch_matches_encode() {
        let tokenizer = tokenizer();
        let texts = ["lower", "low low", "slower"];

        let batch = tokenizer.encode_batch(&texts).unwrap();
        for (text, encoding) in texts.iter().zip(&batch) {
            assert_eq!(encoding, &tokenizer.encode(text).unwrap());
        }
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: TokenizerConfig = serde_json::from_str(r#"{"unk_token": "<oov>"}"#).unwrap();
        assert_eq!(config.unk_token, "<oov>");
        assert_eq!(config.segmentation, Segmentation::Standardizing);
        assert_eq!(config.cache_capacity, None);
    }
}
