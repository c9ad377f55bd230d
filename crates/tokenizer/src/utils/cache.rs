//! Word cache for repeated BPE lookups.
//!
//! Words repeat heavily in natural text, so the merge loop result for each
//! word is kept for the lifetime of the tokenizer. The cache sits behind an
//! `RwLock` so a single tokenizer can be shared across threads; two threads
//! racing on the same new word both compute it and store the same value.

use ahash::AHashMap;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

/// Cache of word -> space-joined BPE symbols.
///
/// Unbounded by default. With a capacity, the oldest inserted entry is
/// evicted first.
pub struct WordCache {
    inner: RwLock<CacheInner>,
    /// Maximum number of entries, `None` for unbounded
    capacity: Option<usize>,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Default)]
struct CacheInner {
    entries: AHashMap<String, String>,
    /// Track insertion order for eviction (only when bounded)
    insertion_order: VecDeque<String>,
}

impl WordCache {
    /// Create an unbounded cache.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CacheInner::default()),
            capacity: None,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Create a cache holding at most `capacity` words.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(CacheInner {
                entries: AHashMap::with_capacity(capacity),
                insertion_order: VecDeque::with_capacity(capacity),
            }),
            capacity: Some(capacity),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Get a cached result.
    pub fn get(&self, word: &str) -> Option<String> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let cached = inner.entries.get(word).cloned();
        match cached {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        cached
    }

    /// Get a cached result or compute and store it.
    ///
    /// # Arguments
    /// * `word` - The word to look up
    /// * `compute` - Function producing the result on a miss
    pub fn get_or_insert_with<F>(&self, word: &str, compute: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        if let Some(cached) = self.get(word) {
            return cached;
        }

        let value = compute(word);
        self.insert(word.to_string(), value.clone());
        value
    }

    /// Insert a value into the cache.
    fn insert(&self, key: String, value: String) {
        if self.capacity == Some(0) {
            return;
        }

        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if inner.entries.contains_key(&key) {
            return;
        }

        if let Some(capacity) = self.capacity {
            while inner.entries.len() >= capacity {
                let Some(oldest) = inner.insertion_order.pop_front() else {
                    break;
                };
                inner.entries.remove(&oldest);
            }
            inner.insertion_order.push_back(key.clone());
        }

        inner.entries.insert(key, value);
    }

    /// Clear all entries from the cache.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.entries.clear();
        inner.insertion_order.clear();
    }

    /// Get the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the cache capacity.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            capacity: self.capacity,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for WordCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WordCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordCache")
            .field("capacity", &self.capacity)
            .field("entries", &self.len())
            .finish()
    }
}

/// Cache statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of entries
    pub entries: usize,
    /// Maximum capacity, `None` for unbounded
    pub capacity: Option<usize>,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that missed
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups served from the cache, `None` before any lookup.
    pub fn hit_rate(&self) -> Option<f64> {
        let total = self.hits + self.misses;
        (total > 0).then(|| self.hits as f64 / total as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_hit_miss() {
        let cache = WordCache::new();

        let result1 = cache.get_or_insert_with("hello", |_| "hel lo</w>".to_string());
        assert_eq!(result1, "hel lo</w>");

        let result2 = cache.get_or_insert_with("hello", |_| panic!("Should not recompute"));
        assert_eq!(result2, "hel lo</w>");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hit_rate(), Some(0.5));
    }

    #[test]
    fn test_unbounded_grows() {
        let cache = WordCache::new();
        for i in 0..500 {
            let word = format!("w{}", i);
            cache.get_or_insert_with(&word, |w| w.to_string());
        }
        assert_eq!(cache.len(), 500);
        assert_eq!(cache.capacity(), None);
    }

    #[test]
    fn test_bounded_eviction() {
        let cache = WordCache::with_capacity(2);

        cache.get_or_insert_with("a", |_| "a</w>".into());
        cache.get_or_insert_with("b", |_| "b</w>".into());
        cache.get_or_insert_with("c", |_| "c</w>".into());

        // "a" should have been evicted (oldest)
        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let cache = WordCache::with_capacity(0);
        let value = cache.get_or_insert_with("a", |_| "a</w>".into());
        assert_eq!(value, "a</w>");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = WordCache::new();

        cache.get_or_insert_with("hello", |_| "hello</w>".into());
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_shared_across_threads() {
        let cache = std::sync::Arc::new(WordCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    for word in ["low", "lower", "newest"] {
                        cache.get_or_insert_with(word, |w| format!("{}</w>", w));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get("lower").as_deref(), Some("lower</w>"));
    }
}
