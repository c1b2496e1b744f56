//! Arena-backed rooted trees.
//!
//! A [`RootedTree`] stores its nodes in a vector indexed by [`NodeId`].
//! Every constructor numbers the nodes in pre-order, so:
//!
//! - the root is always [`NodeId::ROOT`],
//! - a child always has a larger id than its parent,
//! - the ids of any subtree form one contiguous range.
//!
//! Trees are never mutated after construction. Copies, grafts and
//! re-rootings build fresh arenas.
//!
//! Two trees compare equal iff their [canonical forms][crate::canonical]
//! are equal; node ids play no part in identity.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::canonical::canonical;
use crate::error::TreeError;
use crate::node::Node;
use crate::types::NodeId;

#[derive(Clone)]
pub struct RootedTree {
    nodes: Vec<Node>,
}

impl RootedTree {
    /// The single-node tree.
    pub fn leaf() -> Self {
        Self {
            nodes: vec![Node::new(None)],
        }
    }

    /// Builds a tree whose root has copies of `subtrees` as children, in the given order.
    pub fn from_subtrees<'a>(subtrees: impl IntoIterator<Item = &'a RootedTree>) -> Self {
        let mut builder = TreeBuilder::new();
        let root = builder.add(None);
        for subtree in subtrees {
            builder.graft(&subtree.nodes, NodeId::ROOT, Some(root), |_| true);
        }
        builder.finish()
    }

    /// Builds a tree from a parent array: `parents[i]` is the parent of node `i`,
    /// `None` marks the root.
    ///
    /// The input may number nodes arbitrarily; the result is renumbered in pre-order,
    /// with children kept in increasing order of their input index.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidTree`] if the array is empty, has zero or several
    /// roots, refers to a missing node, or contains a cycle.
    pub fn from_parents(parents: &[Option<usize>]) -> Result<Self, TreeError> {
        let n = parents.len();
        if n == 0 {
            return Err(TreeError::InvalidTree("no nodes".to_string()));
        }

        let mut root = None;
        let mut raw: Vec<Node> = (0..n).map(|_| Node::new(None)).collect();

        for (i, parent) in parents.iter().enumerate() {
            match *parent {
                None => {
                    if let Some(r) = root {
                        return Err(TreeError::InvalidTree(format!(
                            "several roots: {} and {}",
                            r, i
                        )));
                    }
                    root = Some(i);
                }
                Some(p) if p >= n => {
                    return Err(TreeError::InvalidTree(format!(
                        "node {} has missing parent {}",
                        i, p
                    )));
                }
                Some(p) if p == i => {
                    return Err(TreeError::InvalidTree(format!("node {} is its own parent", i)));
                }
                Some(p) => {
                    raw[i].parent = Some(NodeId::new(p));
                    raw[p].children.push(NodeId::new(i));
                }
            }
        }

        let root = root.ok_or_else(|| TreeError::InvalidTree("no root".to_string()))?;

        // Every node must reach the root within `n` steps.
        for start in 0..n {
            let mut current = start;
            let mut steps = 0;
            while let Some(p) = parents[current] {
                current = p;
                steps += 1;
                if steps > n {
                    return Err(TreeError::InvalidTree(format!(
                        "cycle through node {}",
                        start
                    )));
                }
            }
        }

        let mut builder = TreeBuilder::with_capacity(n);
        builder.graft(&raw, NodeId::new(root), None, |_| true);
        Ok(builder.finish())
    }

    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        debug_assert!(!nodes.is_empty());
        debug_assert!(nodes[0].is_root());
        Self { nodes }
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl Default for RootedTree {
    fn default() -> Self {
        Self::leaf()
    }
}

impl RootedTree {
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Get the node at the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        assert!(self.contains(id), "Node {} is not in the tree", id);
        &self.nodes[id.index()]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node(id).is_leaf()
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.node(id).degree()
    }

    /// Number of edges between the node and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(p) = self.parent(current) {
            depth += 1;
            current = p;
        }
        depth
    }

    /// Number of nodes in the subtree rooted at `id`, including `id` itself.
    pub fn subtree_size(&self, id: NodeId) -> usize {
        self.preorder_from(id).count()
    }

    /// Largest depth of any node.
    pub fn height(&self) -> usize {
        // Pre-order ids: a parent's depth is known before its children are visited.
        let mut depths = vec![0usize; self.nodes.len()];
        let mut height = 0;
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(p) = node.parent {
                depths[i] = depths[p.index()] + 1;
                height = height.max(depths[i]);
            }
        }
        height
    }

    /// All nodes in pre-order.
    pub fn all_nodes(&self) -> Preorder<'_> {
        self.preorder_from(self.root())
    }

    /// Nodes of the subtree rooted at `id`, in pre-order.
    pub fn preorder_from(&self, id: NodeId) -> Preorder<'_> {
        assert!(self.contains(id), "Node {} is not in the tree", id);
        Preorder {
            tree: self,
            stack: vec![id],
        }
    }

    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.all_nodes().filter(move |&id| self.is_leaf(id))
    }

    /// The canonical form of this tree, see [`canonical`][crate::canonical::canonical].
    pub fn canonical(&self) -> String {
        canonical(self)
    }
}

/// Pre-order iterator over node ids.
pub struct Preorder<'a> {
    tree: &'a RootedTree,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack.extend(self.tree.children(id).iter().rev());
        Some(id)
    }
}

impl PartialEq for RootedTree {
    fn eq(&self, other: &Self) -> bool {
        self.nodes.len() == other.nodes.len() && self.canonical() == other.canonical()
    }
}

impl Eq for RootedTree {}

impl PartialOrd for RootedTree {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RootedTree {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl Hash for RootedTree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Debug for RootedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootedTree")
            .field("nodes", &self.node_count())
            .field("canonical", &self.canonical())
            .finish()
    }
}

impl fmt::Display for RootedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// Incremental arena construction in pre-order.
///
/// Callers must finish one subtree before starting its next sibling,
/// otherwise the pre-order numbering is lost.
pub(crate) struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Appends a node under `parent` and returns its id.
    pub(crate) fn add(&mut self, parent: Option<NodeId>) -> NodeId {
        assert_eq!(
            parent.is_none(),
            self.nodes.is_empty(),
            "Only the first node may be the root"
        );

        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(parent));
        if let Some(p) = parent {
            self.nodes[p.index()].children.push(id);
        }
        id
    }

    /// Copies the subtree of `source` rooted at `from` under `parent`.
    /// Direct children of `from` rejected by `keep` are left out together with their subtrees.
    ///
    /// Returns the id of the copied subtree root.
    pub(crate) fn graft(
        &mut self,
        source: &[Node],
        from: NodeId,
        parent: Option<NodeId>,
        keep: impl Fn(NodeId) -> bool,
    ) -> NodeId {
        let top = self.add(parent);
        let mut stack: Vec<(NodeId, NodeId)> = source[from.index()]
            .children
            .iter()
            .rev()
            .filter(|&&c| keep(c))
            .map(|&c| (c, top))
            .collect();

        while let Some((src, dst_parent)) = stack.pop() {
            let dst = self.add(Some(dst_parent));
            stack.extend(source[src.index()].children.iter().rev().map(|&c| (c, dst)));
        }

        top
    }

    pub(crate) fn finish(self) -> RootedTree {
        RootedTree::from_nodes(self.nodes)
    }
}
