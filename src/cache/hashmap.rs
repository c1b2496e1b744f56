//! HashMap-based memo table.
//!
//! Wraps `std::collections::HashMap` and counts hits and misses.
//! There are no collisions and no evictions: every stored entry stays
//! until [`HashMapCache::clear`] is called.

use std::collections::HashMap;
use std::hash::Hash;

/// A memo table backed by [HashMap].
#[derive(Debug)]
pub struct HashMapCache<K, V> {
    map: HashMap<K, V>,
    hits: usize,
    misses: usize,
}

impl<K, V> Default for HashMapCache<K, V> {
    fn default() -> Self {
        Self::with_capacity(16)
    }
}

impl<K, V> HashMapCache<K, V> {
    /// Creates a new cache with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of cache hits.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Returns the number of cache misses.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Clears all entries and resets the statistics.
    pub fn clear(&mut self) {
        self.map.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

impl<K, V> HashMapCache<K, V>
where
    K: Hash + Eq,
{
    /// Looks up a key in the cache.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.map.get(key) {
            Some(v) => {
                self.hits += 1;
                Some(v)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Inserts a key-value pair into the cache.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) {
        self.map.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_cache_basic() {
        let mut cache = HashMapCache::<usize, String>::default();

        cache.insert(1, "()".to_string());
        cache.insert(2, "(())".to_string());

        assert_eq!(cache.get(&1).map(String::as_str), Some("()"));
        assert_eq!(cache.get(&2).map(String::as_str), Some("(())"));
        assert_eq!(cache.get(&3), None);

        assert_eq!(cache.hits(), 2);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_hashmap_cache_clear() {
        let mut cache = HashMapCache::<usize, u64>::with_capacity(4);

        cache.insert(5, 9);
        assert_eq!(cache.get(&5), Some(&9));

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.get(&5), None);
        assert_eq!(cache.misses(), 1);
    }
}
