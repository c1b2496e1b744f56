//! Canonical forms of rooted trees.
//!
//! The canonical form is a balanced parenthesis string:
//!
//! ```text
//! leaf          -> ()
//! internal node -> ( c_1 c_2 ... c_k )   with c_1 <= c_2 <= ... <= c_k as strings
//! ```
//!
//! Sorting the children's forms makes the string invariant under any
//! permutation of children, so two rooted trees are isomorphic iff their
//! canonical forms are equal.
//!
//! # Example
//!
//! ```
//! use rooted_rs::tree::RootedTree;
//!
//! let t: RootedTree = "(()(()))".parse().unwrap();
//! assert_eq!(t.node_count(), 4);
//! // Children are sorted: "(())" < "()" because '(' < ')'.
//! assert_eq!(t.canonical(), "((())())");
//! ```

use std::str::FromStr;

use crate::error::ParseError;
use crate::tree::{RootedTree, TreeBuilder};
use crate::types::NodeId;

/// Canonical form of the whole tree.
pub fn canonical(tree: &RootedTree) -> String {
    canonical_at(tree, tree.root())
}

/// Canonical form of the subtree rooted at `id`.
pub fn canonical_at(tree: &RootedTree, id: NodeId) -> String {
    let nodes = tree.nodes();
    assert!(id.index() < nodes.len(), "Node {} is not in the tree", id);

    // Pre-order numbering puts every child after its parent, so walking ids
    // backwards finishes all children before their parent is reached.
    let end = id.index() + tree.subtree_size(id);
    let mut forms: Vec<String> = vec![String::new(); end - id.index()];

    for i in (id.index()..end).rev() {
        let node = &nodes[i];
        let mut parts: Vec<String> = node
            .children
            .iter()
            .map(|&c| {
                debug_assert!(c.index() > i, "Cycle or non pre-order edge {} -> {}", i, c);
                std::mem::take(&mut forms[c.index() - id.index()])
            })
            .collect();
        parts.sort_unstable();

        let len = 2 + parts.iter().map(String::len).sum::<usize>();
        let mut s = String::with_capacity(len);
        s.push('(');
        for part in &parts {
            s.push_str(part);
        }
        s.push(')');
        forms[i - id.index()] = s;
    }

    std::mem::take(&mut forms[0])
}

impl RootedTree {
    /// Parses a parenthesis string into a tree.
    ///
    /// Any balanced form is accepted, not only canonical ones; children keep
    /// their textual order. Whitespace is not allowed.
    ///
    /// # Errors
    ///
    /// See [`ParseError`].
    pub fn from_canonical(s: &str) -> Result<Self, ParseError> {
        let bytes = s.as_bytes();
        match bytes.first() {
            None => return Err(ParseError::Empty),
            Some(b'(') => {}
            Some(_) => return Err(unexpected(s, 0)),
        }

        let mut builder = TreeBuilder::with_capacity(s.len() / 2);
        let mut open: Vec<NodeId> = Vec::new();

        for (pos, &b) in bytes.iter().enumerate() {
            if pos > 0 && open.is_empty() {
                return Err(ParseError::Trailing { pos });
            }
            match b {
                b'(' => {
                    let id = builder.add(open.last().copied());
                    open.push(id);
                }
                b')' => {
                    open.pop();
                }
                _ => return Err(unexpected(s, pos)),
            }
        }

        if !open.is_empty() {
            return Err(ParseError::Unbalanced { pos: s.len() });
        }

        Ok(builder.finish())
    }
}

fn unexpected(s: &str, pos: usize) -> ParseError {
    let found = s[pos..].chars().next().unwrap_or('?');
    ParseError::Unexpected { pos, found }
}

impl FromStr for RootedTree {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical(s)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_leaf() {
        assert_eq!(canonical(&RootedTree::leaf()), "()");
    }

    #[test]
    fn test_small_trees() {
        let leaf = RootedTree::leaf();
        let edge = RootedTree::from_subtrees([&leaf]);
        assert_eq!(edge.canonical(), "(())");

        let path3 = RootedTree::from_subtrees([&edge]);
        assert_eq!(path3.canonical(), "((()))");

        let cherry = RootedTree::from_subtrees([&leaf, &leaf]);
        assert_eq!(cherry.canonical(), "(()())");
    }

    #[test]
    fn test_child_permutation() {
        let leaf = RootedTree::leaf();
        let edge = RootedTree::from_subtrees([&leaf]);
        let cherry = RootedTree::from_subtrees([&leaf, &leaf]);

        let orders: [[&RootedTree; 3]; 3] = [
            [&leaf, &edge, &cherry],
            [&cherry, &leaf, &edge],
            [&edge, &cherry, &leaf],
        ];
        let forms: Vec<String> = orders
            .iter()
            .map(|o| RootedTree::from_subtrees(o.iter().copied()).canonical())
            .collect();
        assert!(forms.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(forms[0], "((()())(())())");
    }

    #[test]
    fn test_canonical_at() {
        let t = RootedTree::from_canonical("((())())").unwrap();
        assert_eq!(canonical_at(&t, NodeId::new(1)), "(())");
        assert_eq!(canonical_at(&t, NodeId::new(2)), "()");
        assert_eq!(canonical_at(&t, NodeId::new(3)), "()");
    }

    #[test]
    fn test_parse_roundtrip() {
        for s in ["()", "(())", "(()())", "((())())", "((()())(()))"] {
            let t: RootedTree = s.parse().unwrap();
            assert_eq!(t.canonical(), s);
            assert_eq!(t.to_string(), s);
            assert_eq!(t.node_count(), s.len() / 2);
        }
    }

    #[test]
    fn test_parse_non_canonical_input() {
        let t = RootedTree::from_canonical("(()(()))").unwrap();
        assert_eq!(t.children(t.root()).len(), 2);
        assert!(t.is_leaf(t.children(t.root())[0]));
        assert_eq!(t.canonical(), "((())())");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(RootedTree::from_canonical(""), Err(ParseError::Empty));
        assert_eq!(
            RootedTree::from_canonical(")("),
            Err(ParseError::Unexpected { pos: 0, found: ')' })
        );
        assert_eq!(
            RootedTree::from_canonical("(()"),
            Err(ParseError::Unbalanced { pos: 3 })
        );
        assert_eq!(
            RootedTree::from_canonical("()()"),
            Err(ParseError::Trailing { pos: 2 })
        );
        assert_eq!(
            RootedTree::from_canonical("(x)"),
            Err(ParseError::Unexpected { pos: 1, found: 'x' })
        );
    }
}
