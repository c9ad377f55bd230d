//! Vocabulary storage and lookup.
//!
//! This module provides efficient vocabulary storage using AHashMap for fast lookups
//! and CompactString for memory-efficient string storage.

use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use compact_str::CompactString;

/// Forward mapping: token string -> ID
pub type Vocab = AHashMap<CompactString, u32>;

/// Reverse mapping: ID -> token string
pub type VocabR = AHashMap<u32, CompactString>;

/// Vocabulary with forward and reverse mappings.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Forward mapping: token string -> ID
    pub vocab: Vocab,
    /// Reverse mapping: ID -> token string
    pub vocab_r: VocabR,
    /// Special token IDs (cached for fast access)
    pub special: SpecialTokens,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self {
            vocab: Vocab::new(),
            vocab_r: VocabR::new(),
            special: SpecialTokens::default(),
        }
    }

    /// Create a new vocabulary with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vocab: Vocab::with_capacity(capacity),
            vocab_r: VocabR::with_capacity(capacity),
            special: SpecialTokens::default(),
        }
    }

    /// Build a vocabulary from a token -> ID mapping, deriving the reverse
    /// mapping.
    ///
    /// Two tokens sharing an ID is rejected since the reverse lookup would be
    /// ambiguous.
    pub fn from_map<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let entries = entries.into_iter();
        let mut vocab = Self::with_capacity(entries.size_hint().0);
        for (token, id) in entries {
            vocab.add_token_with_id(token.as_ref(), id)?;
        }
        Ok(vocab)
    }

    /// Add a token to the vocabulary.
    ///
    /// New tokens get the next ID after the current maximum. Returns the ID
    /// assigned to the token, or an error when the ID space is exhausted.
    pub fn add_token(&mut self, token: &str) -> Result<u32> {
        if let Some(&id) = self.vocab.get(token) {
            return Ok(id);
        }

        let id = self.next_id().ok_or_else(|| {
            TokenizerError::InvalidConfig(format!("No free token ID left for '{}'", token))
        })?;
        let token = CompactString::new(token);
        self.vocab_r.insert(id, token.clone());
        self.vocab.insert(token, id);
        Ok(id)
    }

    /// Add a token with a specific ID.
    ///
    /// Returns an error if the ID is already taken.
    pub fn add_token_with_id(&mut self, token: &str, id: u32) -> Result<()> {
        if let Some(existing) = self.vocab_r.get(&id) {
            return Err(TokenizerError::InvalidConfig(format!(
                "Token ID {} already assigned to '{}', cannot assign to '{}'",
                id, existing, token
            )));
        }

        let token = CompactString::new(token);
        self.vocab_r.insert(id, token.clone());
        self.vocab.insert(token, id);

        Ok(())
    }

    /// Register the unknown token, adding it to the vocabulary when missing.
    ///
    /// Returns the unknown token's ID and whether it had to be added.
    pub fn set_unk(&mut self, unk: &str) -> Result<(u32, bool)> {
        let added = !self.vocab.contains_key(unk);
        let id = self.add_token(unk)?;
        self.special.unk = Some(id);
        Ok((id, added))
    }

    /// Get the ID for a token string.
    #[inline]
    pub fn get_id(&self, token: &str) -> Option<u32> {
        self.vocab.get(token).copied()
    }

    /// Get the token string for an ID.
    #[inline]
    pub fn get_token(&self, id: u32) -> Option<&str> {
        self.vocab_r.get(&id).map(|s| s.as_str())
    }

    /// Get the size of the vocabulary.
    #[inline]
    pub fn len(&self) -> usize {
        self.vocab.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vocab.is_empty()
    }

    /// Entries sorted by ID, for stable serialization.
    pub fn sorted_entries(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<_> = self
            .vocab_r
            .iter()
            .map(|(&id, token)| (token.as_str(), id))
            .collect();
        entries.sort_unstable_by_key(|&(_, id)| id);
        entries
    }

    fn next_id(&self) -> Option<u32> {
        match self.vocab_r.keys().max() {
            Some(&max) => max.checked_add(1),
            None => Some(0),
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

/// Special token IDs cached for fast access.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecialTokens {
    /// Unknown token ID
    pub unk: Option<u32>,
}
