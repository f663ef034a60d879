//! A compact encoding for ordered forests and an ancestor-aware filter over it.
//!
//! A forest (an ordered sequence of ordered trees) is stored as two parallel
//! integer sequences in depth-first preorder: node ids and node depths.
//! Parent-child relationships are not stored explicitly; they follow entirely
//! from position and depth. Roots have depth 0, a node's children have its
//! depth plus one and immediately follow it.
//!
//! ```text
//! ids:    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11
//! depths: 0, 1, 2, 3, 1, 0, 1, 0, 1, 1,  2
//! ```
//!
//! encodes the forest
//!
//! ```text
//! 1
//! - 2
//! - - 3
//! - - - 4
//! - 5
//! 6
//! - 7
//! 8
//! - 9
//! - 10
//! - - 11
//! ```
//!
//! The [`filter`] operation derives a reduced forest in a single pass: a node
//! survives iff its id passes a predicate and all of its ancestors do too.
//!
//! # Example
//!
//! ```
//! use flatforest::{filter, FlatHierarchy, Hierarchy};
//!
//! let forest = FlatHierarchy::new(
//!     vec![1, 11, 111, 112, 12, 121, 122],
//!     vec![0, 1, 2, 2, 1, 2, 2],
//! )
//! .unwrap();
//!
//! // Dropping node 11 drops its whole subtree; its sibling branch survives.
//! let pruned = filter(&forest, |id| id != 11);
//! assert_eq!(pruned.format_string(), "[1:0, 12:1, 121:2, 122:2]");
//! ```

pub mod forest;
pub mod memory;

pub use forest::{filter, try_filter, EncodingError, FlatHierarchy, Hierarchy};
pub use memory::IntList;
