//! Flip transform: grouping rooted trees by unrooted isomorphism (OEIS A000055).
//!
//! The *unrooted canonical form* of a rooted tree is the smallest canonical
//! form among all its re-rootings. Every rooting of one unrooted tree has
//! the same set of re-rootings, so two rooted trees share the unrooted form
//! iff they are the same tree once the root is forgotten.
//!
//! Computing the form costs one re-rooting and one canonicalization per
//! node, so clustering all of `generate(n)` is roughly cubic in `n` times
//! `A000081(n)`. It becomes slow beyond `n` of about 12.
//!
//! # Example
//!
//! ```
//! use rooted_rs::flip::group_into_clusters;
//! use rooted_rs::generator::Generator;
//!
//! let generator = Generator::new();
//! let trees = generator.generate(5);
//! let clusters = group_into_clusters(trees.iter());
//! assert_eq!(trees.len(), 9);
//! assert_eq!(clusters.len(), 3);
//! ```

use std::collections::BTreeMap;

use log::debug;

use crate::cache::TreeCache;
use crate::error::VerifyError;
use crate::generator::Generator;
use crate::oeis::{a000055, a000081};
use crate::reroot::reroot_at;
use crate::tree::RootedTree;

/// The minimum canonical form over all re-rootings of `tree`.
pub fn unrooted_canonical(tree: &RootedTree) -> String {
    let mut min = tree.canonical();
    for v in tree.all_nodes().skip(1) {
        let form = reroot_at(tree, v).canonical();
        if form < min {
            min = form;
        }
    }
    min
}

/// Whether `a` and `b` are the same tree up to the choice of root.
pub fn same_unrooted_class(a: &RootedTree, b: &RootedTree) -> bool {
    a.node_count() == b.node_count() && unrooted_canonical(a) == unrooted_canonical(b)
}

/// A rooted tree paired with its unrooted canonical form.
#[derive(Debug, Clone)]
pub struct UnrootedTree {
    representative: RootedTree,
    canonical: String,
}

impl UnrootedTree {
    pub fn new(representative: RootedTree) -> Self {
        let canonical = unrooted_canonical(&representative);
        Self {
            representative,
            canonical,
        }
    }

    pub fn representative(&self) -> &RootedTree {
        &self.representative
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl PartialEq for UnrootedTree {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for UnrootedTree {}

/// Rooted trees sharing one unrooted canonical form.
///
/// Members are borrowed from the input of [`group_into_clusters`].
#[derive(Debug, Clone)]
pub struct Cluster<'a> {
    canonical: String,
    members: Vec<&'a RootedTree>,
}

impl<'a> Cluster<'a> {
    /// The unrooted canonical form shared by all members.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn members(&self) -> &[&'a RootedTree] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a RootedTree> + '_ {
        self.members.iter().copied()
    }
}

/// Partition `trees` into clusters of unrooted-isomorphic trees.
///
/// Clusters come out ordered by their unrooted canonical form; members keep
/// their input order. Inputs of different sizes never share a cluster.
pub fn group_into_clusters<'a>(trees: impl IntoIterator<Item = &'a RootedTree>) -> Vec<Cluster<'a>> {
    let mut map: BTreeMap<String, Vec<&'a RootedTree>> = BTreeMap::new();
    let mut total = 0;
    for tree in trees {
        map.entry(unrooted_canonical(tree)).or_default().push(tree);
        total += 1;
    }
    debug!("group_into_clusters: {} trees -> {} clusters", total, map.len());

    map.into_iter()
        .map(|(canonical, members)| Cluster { canonical, members })
        .collect()
}

impl<C: TreeCache> Generator<C> {
    /// Number of unrooted trees with `n` nodes, by clustering `generate(n)`.
    pub fn cluster_count(&self, n: usize) -> usize {
        let trees = self.generate(n);
        group_into_clusters(trees.iter()).len()
    }

    /// Check tree and cluster counts against the OEIS tables for `1..=max_n`.
    ///
    /// # Errors
    ///
    /// Returns the first mismatch, or [`VerifyError::OutOfRange`] if `max_n`
    /// exceeds the tables.
    pub fn verify(&self, max_n: usize) -> Result<(), VerifyError> {
        if a000081(max_n).is_none() || a000055(max_n).is_none() {
            return Err(VerifyError::OutOfRange { n: max_n });
        }

        for n in 1..=max_n {
            let (Some(rooted), Some(unrooted)) = (a000081(n), a000055(n)) else {
                return Err(VerifyError::OutOfRange { n });
            };

            let trees = self.generate(n);
            if trees.len() as u64 != rooted {
                return Err(VerifyError::TreeCount {
                    n,
                    expected: rooted,
                    actual: trees.len(),
                });
            }

            let clusters = group_into_clusters(trees.iter()).len();
            if clusters as u64 != unrooted {
                return Err(VerifyError::ClusterCount {
                    n,
                    expected: unrooted,
                    actual: clusters,
                });
            }
            debug!("verify: n = {} ok ({} trees, {} clusters)", n, rooted, unrooted);
        }
        Ok(())
    }
}
