//! Components defining the flat forest encoding.
//!
//! An ordered forest is stored as two parallel integer sequences in
//! depth-first preorder: node ids and node depths. The depth sequence obeys
//! the following invariants:
//!
//!  - The first node, if any, has depth 0.
//!  - No depth is negative.
//!  - If a node has depth `d`, the next node has depth at most `d + 1`:
//!    `d + 1` makes it the first child, `d` the next sibling, and anything
//!    smaller closes one or more enclosing subtrees.
//!
//! Parent-child relationships are never stored; they are derived entirely
//! from position and depth.
use std::iter::FusedIterator;
use std::ops::Range;

mod filter;
mod flat;

pub use filter::{filter, try_filter};
pub use flat::{EncodingError, FlatHierarchy};

/// Read-only view of a forest in the flat preorder encoding.
///
/// A hierarchy is immutable once built. Deriving a reduced view goes through
/// [`filter`], which produces a brand-new hierarchy and leaves the source
/// untouched.
pub trait Hierarchy {
    /// The number of nodes in the hierarchy.
    fn len(&self) -> usize;

    /// Returns the id of the node at preorder position `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not less than [`len`](Hierarchy::len).
    fn node_id(&self, index: usize) -> i64;

    /// Returns the depth of the node at preorder position `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not less than [`len`](Hierarchy::len).
    fn depth(&self, index: usize) -> i64;

    /// Returns whether the hierarchy has no nodes.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the hierarchy as `[id_0:depth_0, id_1:depth_1, …]`.
    ///
    /// Two hierarchies render identically iff they hold the same ids and
    /// depths in the same order.
    fn format_string(&self) -> String {
        let entries: Vec<String> = (0..self.len())
            .map(|index| format!("{}:{}", self.node_id(index), self.depth(index)))
            .collect();
        format!("[{}]", entries.join(", "))
    }

    /// Returns the position of a node's parent, or `None` for roots.
    ///
    /// The parent is the nearest preceding node whose depth is one less.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not less than [`len`](Hierarchy::len).
    fn parent(&self, index: usize) -> Option<usize> {
        let depth = self.depth(index);
        if depth == 0 {
            return None;
        }
        (0..index).rev().find(|&i| self.depth(i) == depth - 1)
    }

    /// Returns the contiguous preorder span of a node and its descendants.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not less than [`len`](Hierarchy::len).
    fn subtree_range(&self, index: usize) -> Range<usize> {
        let depth = self.depth(index);
        let mut end = index + 1;
        while end < self.len() && self.depth(end) > depth {
            end += 1;
        }
        index..end
    }

    /// Iterates over the positions of a node's children, in order.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not less than [`len`](Hierarchy::len).
    fn children(&self, index: usize) -> Children<'_, Self> {
        Children {
            hierarchy: self,
            cursor: index + 1,
            end: self.subtree_range(index).end,
            depth: self.depth(index) + 1,
        }
    }

    /// Iterates over the positions of the root nodes, in order.
    fn roots(&self) -> Children<'_, Self> {
        Children {
            hierarchy: self,
            cursor: 0,
            end: self.len(),
            depth: 0,
        }
    }

    /// Iterates over `(id, depth)` pairs in preorder.
    fn iter(&self) -> Nodes<'_, Self> {
        Nodes {
            hierarchy: self,
            front: 0,
            back: self.len(),
        }
    }
}

/// Iterator over the positions of the nodes at a fixed depth within a span.
///
/// Created by [`Hierarchy::children`] and [`Hierarchy::roots`].
pub struct Children<'a, H: ?Sized> {
    hierarchy: &'a H,
    cursor: usize,
    end: usize,
    depth: i64,
}

impl<'a, H: Hierarchy + ?Sized> Iterator for Children<'a, H> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.end {
            let index = self.cursor;
            self.cursor += 1;
            if self.hierarchy.depth(index) == self.depth {
                return Some(index);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.end - self.cursor))
    }
}

impl<'a, H: Hierarchy + ?Sized> FusedIterator for Children<'a, H> {}

/// Iterator over the `(id, depth)` pairs of a hierarchy in preorder.
///
/// Created by [`Hierarchy::iter`].
pub struct Nodes<'a, H: ?Sized> {
    hierarchy: &'a H,
    front: usize,
    back: usize,
}

impl<'a, H: Hierarchy + ?Sized> Iterator for Nodes<'a, H> {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let index = self.front;
        self.front += 1;
        Some((self.hierarchy.node_id(index), self.hierarchy.depth(index)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, H: Hierarchy + ?Sized> DoubleEndedIterator for Nodes<'a, H> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        Some((self.hierarchy.node_id(self.back), self.hierarchy.depth(self.back)))
    }
}

impl<'a, H: Hierarchy + ?Sized> ExactSizeIterator for Nodes<'a, H> {
    #[inline]
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<'a, H: Hierarchy + ?Sized> FusedIterator for Nodes<'a, H> {}
