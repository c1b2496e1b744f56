use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{HashMapCache, TreeCache, Trees};

/// Memo table guarded by a [`Mutex`], for generators shared between threads.
///
/// The lock is held only for a single lookup or store, never while trees are
/// being generated. Two threads may therefore compute the same size at once;
/// both results are identical and the later store wins.
#[derive(Debug, Default)]
pub struct SyncCache {
    inner: Mutex<HashMapCache<usize, Trees>>,
}

impl SyncCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMapCache<usize, Trees>> {
        // Entries are immutable once stored, so a panic elsewhere cannot leave them half-written.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TreeCache for SyncCache {
    fn lookup(&self, n: usize) -> Option<Trees> {
        self.lock().get(&n).cloned()
    }

    fn store(&self, n: usize, trees: Trees) {
        self.lock().insert(n, trees);
    }

    fn clear(&self) {
        self.lock().clear();
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn hits(&self) -> usize {
        self.lock().hits()
    }

    fn misses(&self) -> usize {
        self.lock().misses()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::tree::RootedTree;

    #[test]
    fn test_sync_cache_across_threads() {
        let cache = SyncCache::new();
        std::thread::scope(|s| {
            for n in 1..=4 {
                let cache = &cache;
                s.spawn(move || {
                    cache.store(n, Arc::new(vec![RootedTree::leaf(); n]));
                });
            }
        });

        assert_eq!(cache.len(), 4);
        for n in 1..=4 {
            assert_eq!(cache.lookup(n).map(|t| t.len()), Some(n));
        }
        assert_eq!(cache.hits(), 4);
    }
}
