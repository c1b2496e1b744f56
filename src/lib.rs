//! # rooted-rs: rooted tree enumeration and unrooted equivalence
//!
//! **`rooted-rs`** enumerates all rooted trees with `n` unlabeled nodes and
//! groups them into classes of trees that coincide once the root is forgotten.
//!
//! ## What is counted?
//!
//! - Rooted trees with `n` nodes are counted by OEIS [A000081](https://oeis.org/A000081):
//!   `1, 1, 2, 4, 9, 20, 48, 115, 286, 719, 1842, ...`
//! - Unrooted (free) trees with `n` nodes are counted by OEIS [A000055](https://oeis.org/A000055):
//!   `1, 1, 1, 2, 3, 6, 11, 23, 47, 106, 235, ...`
//!
//! Every unrooted tree is obtained from several rooted ones by picking a
//! different root. Grouping rooted trees this way is called the *flip transform*.
//!
//! ## Key Features
//!
//! - **Canonical forms**: every rooted tree has a unique parenthesis string,
//!   invariant under reordering children. It is the only notion of identity.
//! - **Arena trees**: nodes live in a vector and refer to each other by [`NodeId`][crate::types::NodeId],
//!   so parent links are plain indices.
//! - **Memoized generation**: the [`Generator`][crate::generator::Generator] owns an injected
//!   cache, either single-threaded or `Mutex`-guarded.
//! - **Exact counts**: [`oeis`] computes both sequences with big integers for any `n`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use rooted_rs::flip::group_into_clusters;
//! use rooted_rs::generator::Generator;
//!
//! // 1. Create a generator (with its own cache)
//! let generator = Generator::new();
//!
//! // 2. All rooted trees with 4 nodes
//! let trees = generator.generate(4);
//! assert_eq!(trees.len(), 4);
//!
//! // 3. Group them by unrooted isomorphism: the path and the star
//! let clusters = group_into_clusters(trees.iter());
//! assert_eq!(clusters.len(), 2);
//!
//! // 4. Re-root a tree at one of its leaves
//! let star = &trees[3];
//! assert_eq!(star.canonical(), "(()()())");
//! let leaf = star.leaves().next().unwrap();
//! assert_eq!(star.reroot_at(leaf).canonical(), "((()()))");
//! ```
//!
//! ## Core Components
//!
//! - **[`tree`]**: the [`RootedTree`][crate::tree::RootedTree] arena and its accessors.
//! - **[`canonical`]**: canonical forms and parsing them back.
//! - **[`generator`]**: enumeration of all rooted trees with `n` nodes.
//! - **[`reroot`]**: re-rooting by path reversal.
//! - **[`flip`]**: unrooted canonical forms and clustering.

pub mod cache;
pub mod canonical;
pub mod debug;
pub mod error;
pub mod flip;
pub mod generator;
pub mod node;
pub mod oeis;
pub mod partition;
pub mod reroot;
pub mod summary;
pub mod tree;
pub mod types;
