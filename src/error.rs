//! Error types.
//!
//! The domain is pure computation, so the taxonomy is small: malformed
//! hand-built trees, malformed canonical strings, and oracle mismatches
//! found by [`Generator::verify`][crate::generator::Generator::verify].

use std::fmt;

use crate::types::NodeId;

/// Error for malformed tree input.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TreeError {
    /// The parent array does not describe a single acyclic rooted tree.
    InvalidTree(String),
    /// The node id does not belong to the tree.
    UnknownNode(NodeId),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::InvalidTree(msg) => write!(f, "Invalid tree: {}", msg),
            TreeError::UnknownNode(id) => write!(f, "Unknown node {}", id),
        }
    }
}

impl std::error::Error for TreeError {}

/// Error for malformed canonical (parenthesis) strings.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// The input contains no tree at all.
    Empty,
    /// A character other than `(` or `)` was found, or `)` where a node was expected.
    Unexpected { pos: usize, found: char },
    /// The input ended before all opened nodes were closed.
    Unbalanced { pos: usize },
    /// Extra input follows a complete tree.
    Trailing { pos: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Parse error: empty input"),
            ParseError::Unexpected { pos, found } => {
                write!(f, "Parse error: unexpected '{}' at position {}", found, pos)
            }
            ParseError::Unbalanced { pos } => {
                write!(f, "Parse error: unbalanced parentheses at position {}", pos)
            }
            ParseError::Trailing { pos } => {
                write!(f, "Parse error: trailing input at position {}", pos)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Mismatch between generated counts and the OEIS tables.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum VerifyError {
    TreeCount { n: usize, expected: u64, actual: usize },
    ClusterCount { n: usize, expected: u64, actual: usize },
    /// `n` lies beyond the tabulated range.
    OutOfRange { n: usize },
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::TreeCount { n, expected, actual } => write!(
                f,
                "Rooted tree count mismatch for n = {}: expected {}, got {}",
                n, expected, actual
            ),
            VerifyError::ClusterCount { n, expected, actual } => write!(
                f,
                "Cluster count mismatch for n = {}: expected {}, got {}",
                n, expected, actual
            ),
            VerifyError::OutOfRange { n } => {
                write!(f, "No tabulated value for n = {}", n)
            }
        }
    }
}

impl std::error::Error for VerifyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            TreeError::UnknownNode(NodeId::new(4)).to_string(),
            "Unknown node #4"
        );
        assert_eq!(
            ParseError::Unexpected { pos: 2, found: 'x' }.to_string(),
            "Parse error: unexpected 'x' at position 2"
        );
        assert_eq!(
            VerifyError::ClusterCount {
                n: 5,
                expected: 3,
                actual: 2
            }
            .to_string(),
            "Cluster count mismatch for n = 5: expected 3, got 2"
        );
    }
}
