//! Re-rooting by path reversal.
//!
//! Re-rooting at `v` walks the parent chain `v, parent(v), ..., root` and
//! reverses it: every node on the chain keeps its off-path children and
//! gains its former parent as one more child. The old root ends up at the
//! bottom of the reversed chain with only its off-path children.
//!
//! ```text
//!       r                    v
//!      / \                  / \
//!     a   b     at v ->    c   a
//!    / \                      / \
//!   v   d                    d   r
//!   |                            |
//!   c                            b
//! ```
//!
//! The result is the same unrooted tree with a different root, so the node
//! count is preserved while the canonical form generally changes.

use log::debug;

use crate::error::TreeError;
use crate::tree::{RootedTree, TreeBuilder};
use crate::types::NodeId;

/// Re-root `tree` at `target`.
///
/// # Panics
///
/// Panics if `target` is not a node of `tree`. See [`try_reroot_at`].
pub fn reroot_at(tree: &RootedTree, target: NodeId) -> RootedTree {
    reroot_tracking(tree, target).0
}

/// Re-root `tree` at `target`, failing with [`TreeError::UnknownNode`] for foreign ids.
pub fn try_reroot_at(tree: &RootedTree, target: NodeId) -> Result<RootedTree, TreeError> {
    if !tree.contains(target) {
        return Err(TreeError::UnknownNode(target));
    }
    Ok(reroot_at(tree, target))
}

/// Like [`reroot_at`], also returning the id the old root has in the new tree.
pub fn reroot_tracking(tree: &RootedTree, target: NodeId) -> (RootedTree, NodeId) {
    assert!(tree.contains(target), "Node {} is not in the tree", target);

    if target == tree.root() {
        return (tree.clone(), tree.root());
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(p) = tree.parent(current) {
        path.push(p);
        current = p;
    }
    debug!("reroot_at({}): path of {} nodes", target, path.len());

    let nodes = tree.nodes();
    let mut builder = TreeBuilder::with_capacity(tree.node_count());

    // Nothing below `target` lies on the path, so its whole subtree is kept.
    let mut attach = builder.graft(nodes, target, None, |_| true);
    for pair in path.windows(2) {
        let (below, node) = (pair[0], pair[1]);
        attach = builder.graft(nodes, node, Some(attach), |c| c != below);
    }

    let rerooted = builder.finish();
    debug_assert_eq!(rerooted.node_count(), tree.node_count());
    (rerooted, attach)
}

/// Every re-rooting of `tree`, one per node, in pre-order of the chosen root.
pub fn rerootings(tree: &RootedTree) -> impl Iterator<Item = (NodeId, RootedTree)> + '_ {
    tree.all_nodes().map(move |v| (v, reroot_at(tree, v)))
}

impl RootedTree {
    /// See [`reroot_at`][crate::reroot::reroot_at].
    pub fn reroot_at(&self, target: NodeId) -> RootedTree {
        reroot_at(self, target)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::generator::Generator;

    fn tree(s: &str) -> RootedTree {
        s.parse().unwrap()
    }

    #[test]
    fn test_reroot_at_root_is_copy() {
        let t = tree("((())()())");
        let r = reroot_at(&t, t.root());
        assert_eq!(r.canonical(), t.canonical());
        assert_eq!(r.node_count(), t.node_count());
    }

    #[test]
    fn test_single_node() {
        let t = RootedTree::leaf();
        assert_eq!(reroot_at(&t, t.root()).canonical(), "()");
    }

    #[test]
    fn test_path_end_to_end() {
        // Path of 3 rooted at one end, re-rooted at the other end.
        let t = tree("((()))");
        let r = reroot_at(&t, NodeId::new(2));
        assert_eq!(r.canonical(), "((()))");
        // Re-rooted at the middle: a cherry.
        let r = reroot_at(&t, NodeId::new(1));
        assert_eq!(r.canonical(), "(()())");
    }

    #[test]
    fn test_doc_example() {
        // r(a(v(c), d), b) with ids r=0, a=1, v=2, c=3, d=4, b=5.
        let t = tree("(((())())())");
        let v = NodeId::new(2);
        assert_eq!(t.children(v).len(), 1);

        let (r, old_root) = reroot_tracking(&t, v);
        // v(c, a(d, r(b)))
        assert_eq!(r.canonical(), tree("(()(()(())))").canonical());
        assert_eq!(r.degree(r.root()), 2);
        assert_eq!(r.depth(old_root), 2);
        assert_eq!(r.degree(old_root), 1);
    }

    #[test]
    fn test_try_reroot_unknown_node() {
        let t = tree("(())");
        assert_eq!(
            try_reroot_at(&t, NodeId::new(2)),
            Err(TreeError::UnknownNode(NodeId::new(2)))
        );
        assert!(try_reroot_at(&t, NodeId::new(1)).is_ok());
    }

    #[test]
    fn test_preserves_node_count_and_roundtrips() {
        let generator = Generator::new();
        for n in 1..=7 {
            for t in generator.generate(n).iter() {
                for (v, r) in rerootings(t) {
                    assert_eq!(r.node_count(), n);

                    let (r, old_root) = reroot_tracking(t, v);
                    let back = reroot_at(&r, old_root);
                    assert_eq!(back.canonical(), t.canonical(), "{} at {}", t, v);
                }
            }
        }
    }
}
