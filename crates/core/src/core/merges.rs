//! Merge rule management for BPE.
//!
//! Merge rules are keyed by the two symbol strings being joined. The table is
//! nested (`left -> right -> rank`) so that lookups can borrow `&str` symbols
//! straight out of a word without building an owned key.

use ahash::AHashMap;
use compact_str::CompactString;

/// Merge rank lookup: left symbol -> right symbol -> rank.
pub type MergeMap = AHashMap<CompactString, AHashMap<CompactString, u32>>;

/// Collection of BPE merge rules with efficient lookup.
#[derive(Debug, Clone, Default)]
pub struct MergeRanks {
    /// Merge rules: left -> right -> rank
    merges: MergeMap,
    /// Number of rules
    len: usize,
    /// Maximum rank (for validation and ordering)
    max_rank: u32,
}

impl MergeRanks {
    /// Create a new empty collection of merge rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new collection with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            merges: MergeMap::with_capacity(capacity),
            len: 0,
            max_rank: 0,
        }
    }

    /// Add a merge rule.
    ///
    /// # Arguments
    /// * `left` - First symbol of the pair
    /// * `right` - Second symbol of the pair
    /// * `rank` - The priority rank (lower = higher priority)
    ///
    /// Re-adding a pair overwrites its rank.
    pub fn add_merge(&mut self, left: &str, right: &str, rank: u32) {
        let previous = self
            .merges
            .entry(CompactString::new(left))
            .or_default()
            .insert(CompactString::new(right), rank);
        if previous.is_none() {
            self.len += 1;
        }
        self.max_rank = self.max_rank.max(rank);
    }

    /// Get the rank of a pair, `None` if the pair is not a merge rule.
    #[inline]
    pub fn rank(&self, left: &str, right: &str) -> Option<u32> {
        self.merges.get(left)?.get(right).copied()
    }

    /// Get the number of merge rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if there are no merge rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All rules ordered by rank.
    pub fn sorted(&self) -> Vec<(&str, &str, u32)> {
        let mut rules: Vec<_> = self
            .merges
            .iter()
            .flat_map(|(left, rights)| {
                rights
                    .iter()
                    .map(move |(right, &rank)| (left.as_str(), right.as_str(), rank))
            })
            .collect();
        rules.sort_unstable_by_key(|&(_, _, rank)| rank);
        rules
    }

    /// Create merge rules from a list of pairs.
    ///
    /// The pairs are assigned ranks in order (0, 1, 2, ...).
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let pairs = pairs.into_iter();
        let mut rules = Self::with_capacity(pairs.size_hint().0);

        for (rank, (left, right)) in pairs.enumerate() {
            rules.add_merge(left.as_ref(), right.as_ref(), rank as u32);
        }

        rules
    }
}

/// Statistics about merge rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Number of merge rules
    pub count: usize,
    /// Maximum rank
    pub max_rank: u32,
    /// Minimum rank
    pub min_rank: u32,
    /// Whether ranks run 0, 1, 2, ... without gaps
    pub consecutive: bool,
}

impl MergeRanks {
    /// Get statistics about the merge rules.
    pub fn stats(&self) -> MergeStats {
        let sorted = self.sorted();
        let min_rank = sorted.first().map_or(0, |&(_, _, rank)| rank);
        let consecutive = sorted
            .iter()
            .enumerate()
            .all(|(index, &(_, _, rank))| index as u32 == rank);

        MergeStats {
            count: self.len(),
            max_rank: self.max_rank,
            min_rank,
            consecutive,
        }
    }
}
