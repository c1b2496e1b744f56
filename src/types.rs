//! Type-safe wrapper for node identifiers.
//!
//! Node ids are arena indices. They are assigned in pre-order whenever a
//! tree is built or copied, so they are stable within one tree value but
//! carry no meaning across trees: two isomorphic trees may number their
//! nodes differently, and identity is decided by the canonical form alone.
use std::fmt;

/// A node identifier (0-indexed position in the tree arena).
///
/// # Invariants
///
/// - The root of every tree built by this crate has id 0
/// - Ids of a tree with `n` nodes are exactly `0..n`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The id of the root of every tree built by this crate.
    pub const ROOT: NodeId = NodeId(0);

    /// Creates a node id from an arena index.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not fit into `u32`.
    pub fn new(index: usize) -> Self {
        assert!(index <= u32::MAX as usize, "Node index {} is too large", index);
        NodeId(index as u32)
    }

    /// Returns the arena index as `usize`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Checks if this is the conventional root id.
    pub fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.index()
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        NodeId::new(index)
    }
}
