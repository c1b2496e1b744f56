//! Per-size summaries for display layers.
//!
//! A [`Summary`] bundles what a presentation layer needs about one node
//! count: how many rooted trees ("terms") and unrooted classes ("clusters")
//! there are, the canonical form of every rooted tree, and the size of
//! every cluster.

use std::fmt;

use crate::cache::TreeCache;
use crate::flip::group_into_clusters;
use crate::generator::Generator;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Summary {
    pub nodes: usize,
    pub tree_count: usize,
    pub cluster_count: usize,
    /// Canonical forms in generation order.
    pub canonicals: Vec<String>,
    /// Cluster sizes, ordered by the clusters' unrooted canonical forms.
    pub cluster_sizes: Vec<usize>,
}

impl<C: TreeCache> Generator<C> {
    pub fn summary(&self, n: usize) -> Summary {
        let trees = self.generate(n);
        let clusters = group_into_clusters(trees.iter());
        Summary {
            nodes: n,
            tree_count: trees.len(),
            cluster_count: clusters.len(),
            canonicals: trees.iter().map(|t| t.canonical()).collect(),
            cluster_sizes: clusters.iter().map(|c| c.len()).collect(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "n = {}: {} rooted trees, {} clusters",
            self.nodes, self.tree_count, self.cluster_count
        )?;
        for canonical in &self.canonicals {
            writeln!(f, "  {}", canonical)?;
        }
        write!(f, "  cluster sizes: {:?}", self.cluster_sizes)
    }
}
