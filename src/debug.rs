//! Debug utilities for inspecting tree structure.
//!
//! These are mostly useful in tests and in the demo programs.

use std::fmt;

use crate::canonical::canonical_at;
use crate::tree::RootedTree;
use crate::types::NodeId;

/// Detailed information about a single tree node.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NodeInfo {
    pub id: NodeId,
    /// Parent id (None for the root)
    pub parent: Option<NodeId>,
    /// Edges between the node and the root
    pub depth: usize,
    /// Number of children
    pub degree: usize,
    /// Nodes in the subtree, including this one
    pub subtree_size: usize,
    /// Canonical form of the subtree
    pub canonical: String,
}

impl fmt::Display for NodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(parent={}, depth={}, degree={}, size={}, form={})",
            self.id,
            self.parent.map_or("-".to_string(), |p| p.to_string()),
            self.depth,
            self.degree,
            self.subtree_size,
            self.canonical,
        )
    }
}

/// All nodes of a tree with their [`NodeInfo`], in pre-order.
#[derive(Debug, Clone)]
pub struct TreeDump {
    pub canonical: String,
    pub nodes: Vec<NodeInfo>,
}

impl fmt::Display for TreeDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tree {} ({} nodes):", self.canonical, self.nodes.len())?;
        for node in &self.nodes {
            writeln!(f, "  {}{}", "  ".repeat(node.depth), node)?;
        }
        Ok(())
    }
}

impl RootedTree {
    /// Get detailed information about a single node.
    pub fn node_info(&self, id: NodeId) -> NodeInfo {
        NodeInfo {
            id,
            parent: self.parent(id),
            depth: self.depth(id),
            degree: self.degree(id),
            subtree_size: self.subtree_size(id),
            canonical: canonical_at(self, id),
        }
    }

    pub fn dump(&self) -> TreeDump {
        TreeDump {
            canonical: self.canonical(),
            nodes: self.all_nodes().map(|id| self.node_info(id)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_info() {
        let t: RootedTree = "((())())".parse().unwrap();

        let root = t.node_info(t.root());
        assert_eq!(root.parent, None);
        assert_eq!(root.depth, 0);
        assert_eq!(root.degree, 2);
        assert_eq!(root.subtree_size, 4);
        assert_eq!(root.canonical, "((())())");

        let inner = t.node_info(NodeId::new(1));
        assert_eq!(inner.parent, Some(NodeId::ROOT));
        assert_eq!(inner.subtree_size, 2);
        assert_eq!(inner.canonical, "(())");
        assert_eq!(
            inner.to_string(),
            "#1(parent=#0, depth=1, degree=1, size=2, form=(()))"
        );
    }

    #[test]
    fn test_dump() {
        let t: RootedTree = "(()())".parse().unwrap();
        let dump = t.dump();
        assert_eq!(dump.nodes.len(), 3);
        let text = dump.to_string();
        assert!(text.starts_with("Tree (()()) (3 nodes):\n"));
        assert!(text.contains("    #2(parent=#0"));
    }
}
