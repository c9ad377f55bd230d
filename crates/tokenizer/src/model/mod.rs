//! BPE model: vocabulary, merge ranks and the word cache.
//!
//! The model works one pre-segmented word at a time. Segmenting raw text into
//! words is the job of [`crate::pre_tokenizer`].

use crate::utils::{CacheStats, WordCache};
use compact_str::CompactString;
use gptbpe_core::{bpe_word, MergeRanks, Result, Vocabulary};
use tracing::{debug, warn};

/// Default unknown token.
pub const DEFAULT_UNK_TOKEN: &str = "<unk>";

/// Word-level BPE model with an end-of-word marker.
#[derive(Debug)]
pub struct BpeModel {
    vocab: Vocabulary,
    merges: MergeRanks,
    cache: WordCache,
    unk_token: CompactString,
    unk_id: u32,
}

impl BpeModel {
    /// Create a model from a vocabulary and merge ranks.
    ///
    /// If `unk_token` is missing from the vocabulary it is appended with the
    /// next free ID, so token lookups always have a fallback. Fails when the
    /// vocabulary has no free ID left for it.
    ///
    /// # Arguments
    /// * `vocab` - Token <-> ID mapping
    /// * `merges` - Merge ranks
    /// * `unk_token` - Token returned for unknown lookups
    /// * `cache_capacity` - Word cache bound, `None` for unbounded
    pub fn new(
        mut vocab: Vocabulary,
        merges: MergeRanks,
        unk_token: &str,
        cache_capacity: Option<usize>,
    ) -> Result<Self> {
        let (unk_id, added) = vocab.set_unk(unk_token)?;
        if added {
            warn!(
                unk_token,
                unk_id, "unknown token missing from vocabulary, appended it"
            );
        }

        debug!(
            vocab_size = vocab.len(),
            merge_count = merges.len(),
            "BPE model initialized"
        );

        let cache = match cache_capacity {
            Some(capacity) => WordCache::with_capacity(capacity),
            None => WordCache::new(),
        };

        Ok(Self {
            vocab,
            merges,
            cache,
            unk_token: CompactString::new(unk_token),
            unk_id,
        })
    }

    /// Apply BPE to one word and return its symbols joined by spaces.
    ///
    /// Single-character words skip both the merge loop and the cache.
    pub fn bpe(&self, word: &str) -> String {
        let mut chars = word.chars();
        match (chars.next(), chars.next()) {
            (None, _) => String::new(),
            (Some(_), None) => format!("{}{}", word, gptbpe_core::END_OF_WORD),
            _ => self
                .cache
                .get_or_insert_with(word, |w| bpe_word(w, &self.merges)),
        }
    }

    /// Apply BPE to one word and return its tokens.
    pub fn tokenize_word(&self, word: &str) -> Vec<String> {
        let joined = self.bpe(word);
        if joined.is_empty() {
            return Vec::new();
        }
        joined.split(' ').map(str::to_string).collect()
    }

    /// Token ID, falling back to the unknown token's ID.
    #[inline]
    pub fn token_to_id(&self, token: &str) -> u32 {
        self.vocab.get_id(token).unwrap_or(self.unk_id)
    }

    /// Token for an ID, falling back to the unknown token.
    #[inline]
    pub fn id_to_token(&self, id: u32) -> &str {
        self.vocab.get_token(id).unwrap_or(self.unk_token.as_str())
    }

    pub fn unk_token(&self) -> &str {
        &self.unk_token
    }

    pub fn unk_id(&self) -> u32 {
        self.unk_id
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn merges(&self) -> &MergeRanks {
        &self.merges
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
