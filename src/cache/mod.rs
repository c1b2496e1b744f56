//! Memo tables for the tree [`Generator`][crate::generator::Generator].
//!
//! The generator never owns a process-wide table. It is handed one of the
//! implementations below, so every generator has an isolated cache and the
//! caller decides on the synchronization discipline:
//!
//! | Implementation | Interior mutability | `Sync` | Use Case |
//! |----------------|---------------------|--------|----------|
//! | [`LocalCache`] | `RefCell` | no | Single thread (default) |
//! | [`SyncCache`] | `Mutex` | yes | Generator shared between threads |
//!
//! Both wrap a [`HashMapCache`] keyed by node count. Cached tree lists are
//! immutable and handed out as [`Arc`]s, so a lookup is a reference count bump.
//!
//! # Example
//!
//! ```
//! use rooted_rs::cache::SyncCache;
//! use rooted_rs::generator::Generator;
//!
//! let generator = Generator::with_cache(SyncCache::default());
//! std::thread::scope(|s| {
//!     s.spawn(|| assert_eq!(generator.generate(6).len(), 20));
//!     s.spawn(|| assert_eq!(generator.generate(7).len(), 48));
//! });
//! ```

mod hashmap;
mod local;
mod sync;

use std::sync::Arc;

pub use hashmap::HashMapCache;
pub use local::LocalCache;
pub use sync::SyncCache;

use crate::tree::RootedTree;

/// All rooted trees of one size, shared between the cache and its readers.
pub type Trees = Arc<Vec<RootedTree>>;

/// Memo table from node count to generated trees.
///
/// Methods take `&self`; implementations provide their own interior mutability.
pub trait TreeCache {
    /// Returns the cached trees with `n` nodes, if present.
    fn lookup(&self, n: usize) -> Option<Trees>;

    /// Stores the trees with `n` nodes.
    fn store(&self, n: usize, trees: Trees);

    /// Drops all entries and resets the statistics.
    fn clear(&self);

    /// Number of cached sizes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn hits(&self) -> usize;

    fn misses(&self) -> usize;
}
