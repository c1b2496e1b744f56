use std::cell::RefCell;

use super::{HashMapCache, TreeCache, Trees};

/// Single-threaded memo table.
#[derive(Debug, Default)]
pub struct LocalCache {
    inner: RefCell<HashMapCache<usize, Trees>>,
}

impl LocalCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TreeCache for LocalCache {
    fn lookup(&self, n: usize) -> Option<Trees> {
        self.inner.borrow_mut().get(&n).cloned()
    }

    fn store(&self, n: usize, trees: Trees) {
        self.inner.borrow_mut().insert(n, trees);
    }

    fn clear(&self) {
        self.inner.borrow_mut().clear();
    }

    fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    fn hits(&self) -> usize {
        self.inner.borrow().hits()
    }

    fn misses(&self) -> usize {
        self.inner.borrow().misses()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::tree::RootedTree;

    #[test]
    fn test_local_cache() {
        let cache = LocalCache::new();
        assert!(cache.is_empty());
        assert!(cache.lookup(1).is_none());

        cache.store(1, Arc::new(vec![RootedTree::leaf()]));
        let trees = cache.lookup(1).unwrap();
        assert_eq!(trees.len(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);

        cache.clear();
        assert!(cache.is_empty());
        // Readers keep their snapshot after a clear.
        assert_eq!(trees.len(), 1);
    }
}
