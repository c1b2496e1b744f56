use crate::types::NodeId;

/// A single node of a [`RootedTree`][crate::tree::RootedTree] arena.
///
/// The parent link is an index, not a reference, so the structure has no
/// ownership cycles. The tree keeps `parent` and `children` consistent.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn new(parent: Option<NodeId>) -> Self {
        Self {
            parent,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn degree(&self) -> usize {
        self.children.len()
    }
}
