//! Enumeration of all rooted trees with `n` nodes (OEIS A000081).
//!
//! A rooted tree with `n > 1` nodes is a root whose subtrees have sizes
//! forming a partition of `n - 1`. For every [partition][crate::partition]
//! the generator picks one tree of each part size from the (memoized) sets
//! of smaller trees and hangs copies of them under a fresh root.
//!
//! Subtree order under a node does not matter, so for a run of equal parts
//! only non-decreasing index sequences are used. Partitions are
//! non-increasing, which keeps equal parts adjacent, so comparing each part
//! with its predecessor is enough. With both rules in place every multiset
//! of subtrees is built exactly once; the canonical-form check before
//! insertion is a safety net that should never fire.
//!
//! # Example
//!
//! ```
//! use rooted_rs::generator::Generator;
//!
//! let generator = Generator::new();
//! let trees = generator.generate(4);
//! let forms: Vec<String> = trees.iter().map(|t| t.canonical()).collect();
//! assert_eq!(forms, ["(((())))", "((()()))", "((())())", "(()()())"]);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::cache::{LocalCache, TreeCache, Trees};
use crate::partition::Partitions;
use crate::tree::RootedTree;

/// Largest node count the OEIS tables cover.
pub const DEFAULT_MAX_NODES: usize = 11;

/// Generator settings.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GeneratorConfig {
    /// Soft cap on the node count. Larger requests are still answered
    /// correctly, but log a warning since clustering them gets expensive.
    pub max_nodes: Option<usize>,
    /// Log an `info!` line for every newly generated size.
    pub log_progress: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_nodes: Some(DEFAULT_MAX_NODES),
            log_progress: false,
        }
    }
}

impl GeneratorConfig {
    pub fn with_max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_log_progress(mut self, log_progress: bool) -> Self {
        self.log_progress = log_progress;
        self
    }
}

/// Memoizing generator of rooted trees.
///
/// The memo table is owned by the generator and supplied by the caller,
/// see [`crate::cache`].
pub struct Generator<C = LocalCache> {
    cache: C,
    config: GeneratorConfig,
}

impl Generator<LocalCache> {
    pub fn new() -> Self {
        Self::with_cache(LocalCache::default())
    }
}

impl Default for Generator<LocalCache> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TreeCache> Generator<C> {
    pub fn with_cache(cache: C) -> Self {
        Self::with_config(cache, GeneratorConfig::default())
    }

    pub fn with_config(cache: C, config: GeneratorConfig) -> Self {
        Self { cache, config }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Forget all memoized results.
    pub fn clear_cache(&self) {
        debug!("clear_cache: dropping {} cached sizes", self.cache.len());
        self.cache.clear();
    }

    /// All pairwise non-isomorphic rooted trees with exactly `n` nodes.
    ///
    /// The result has `A000081(n)` elements; `n = 0` gives an empty list.
    /// Results are memoized, repeated calls share the same list.
    pub fn generate(&self, n: usize) -> Trees {
        if n == 0 {
            return Arc::new(Vec::new());
        }

        if let Some(trees) = self.cache.lookup(n) {
            debug!("generate({}) -> {} trees (cached)", n, trees.len());
            return trees;
        }

        if let Some(max) = self.config.max_nodes {
            if n > max {
                warn!(
                    "generate({}): above the soft cap of {} nodes, expect slow clustering",
                    n, max
                );
            }
        }

        let trees = if n == 1 {
            vec![RootedTree::leaf()]
        } else {
            self.build(n)
        };

        if self.config.log_progress {
            info!("Generated {} rooted trees with {} nodes", trees.len(), n);
        }

        let trees = Arc::new(trees);
        self.cache.store(n, Arc::clone(&trees));
        trees
    }

    fn build(&self, n: usize) -> Vec<RootedTree> {
        let mut result = Vec::new();
        let mut seen = HashSet::new();

        for partition in Partitions::new(n - 1) {
            let sets: Vec<Trees> = partition.iter().map(|&p| self.generate(p)).collect();
            let before = result.len();

            let mut combination = Combination {
                sets: &sets,
                partition: &partition,
                indices: vec![0; partition.len()],
            };
            combination.emit(0, &mut result, &mut seen);

            debug!(
                "generate({}): partition {:?} -> {} trees",
                n,
                partition,
                result.len() - before
            );
        }

        result
    }
}

/// One partition's worth of subtree choices.
struct Combination<'a> {
    sets: &'a [Trees],
    partition: &'a [usize],
    indices: Vec<usize>,
}

impl Combination<'_> {
    fn emit(&mut self, pos: usize, result: &mut Vec<RootedTree>, seen: &mut HashSet<String>) {
        if pos == self.sets.len() {
            let tree = RootedTree::from_subtrees(
                self.indices
                    .iter()
                    .zip(self.sets)
                    .map(|(&i, set)| &set[i]),
            );
            if seen.insert(tree.canonical()) {
                result.push(tree);
            } else {
                debug!("duplicate combination {:?} skipped", self.indices);
            }
            return;
        }

        // Equal adjacent parts: never pick an earlier tree than the previous part did.
        let start = if pos > 0 && self.partition[pos] == self.partition[pos - 1] {
            self.indices[pos - 1]
        } else {
            0
        };

        for i in start..self.sets[pos].len() {
            self.indices[pos] = i;
            self.emit(pos + 1, result, seen);
        }
    }
}
