use std::fmt;

use thiserror::Error;

use crate::forest::Hierarchy;
use crate::memory::IntList;

/// A forest backed by two parallel preorder sequences.
///
/// Construction stores the sequences verbatim after checking that they are
/// the same length and that the depths form a valid preorder walk. All reads
/// are *O*(1) indexing into the backing sequences.
///
/// # Examples
///
/// ```
/// use flatforest::{FlatHierarchy, Hierarchy};
///
/// let forest = FlatHierarchy::new(vec![1, 11, 2, 21], vec![0, 1, 0, 1]).unwrap();
///
/// assert_eq!(forest.len(), 4);
/// assert_eq!(forest.node_id(1), 11);
/// assert_eq!(forest.parent(1), Some(0));
/// assert_eq!(forest.format_string(), "[1:0, 11:1, 2:0, 21:1]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatHierarchy {
    ids: IntList,
    depths: IntList,
}

impl FlatHierarchy {
    /// Creates a hierarchy from parallel id and depth sequences.
    ///
    /// # Errors
    ///
    ///  - When the sequences have different lengths.
    ///  - When a depth is negative.
    ///  - When the first node is not a root.
    ///  - When a depth exceeds its predecessor by more than one.
    pub fn new(ids: Vec<i64>, depths: Vec<i64>) -> Result<Self, EncodingError> {
        let ids = IntList::from(ids);
        let depths = IntList::from(depths);

        if ids.len() != depths.len() {
            return Err(EncodingError::LengthMismatch {
                ids: ids.len(),
                depths: depths.len(),
            });
        }

        for index in 0..depths.len() {
            let depth = depths[index];

            if depth < 0 {
                return Err(EncodingError::NegativeDepth { index, depth });
            }

            if index == 0 {
                if depth != 0 {
                    return Err(EncodingError::RootDepth { depth });
                }
            } else if depth > depths[index - 1] + 1 {
                return Err(EncodingError::DepthJump {
                    index,
                    prev: depths[index - 1],
                    depth,
                });
            }
        }

        Ok(Self { ids, depths })
    }

    /// Assembles a hierarchy from sequences already known to be well formed.
    ///
    /// Filtering only ever removes ancestor-closed subtrees, which preserves
    /// every encoding invariant, so its output skips re-validation.
    pub(crate) fn from_buffers_unchecked(ids: IntList, depths: IntList) -> Self {
        debug_assert_eq!(ids.len(), depths.len());
        Self { ids, depths }
    }

    /// Borrows the node ids in preorder.
    #[inline]
    pub fn ids(&self) -> &[i64] {
        self.ids.as_slice()
    }

    /// Borrows the node depths in preorder.
    #[inline]
    pub fn depths(&self) -> &[i64] {
        self.depths.as_slice()
    }
}

impl Hierarchy for FlatHierarchy {
    #[inline]
    fn len(&self) -> usize {
        self.depths.len()
    }

    #[inline]
    fn node_id(&self, index: usize) -> i64 {
        self.ids[index]
    }

    #[inline]
    fn depth(&self, index: usize) -> i64 {
        self.depths[index]
    }
}

impl fmt::Display for FlatHierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("the id and depth sequences have different lengths ({ids} and {depths})")]
    LengthMismatch { ids: usize, depths: usize },
    #[error("negative depth {depth} at position {index}")]
    NegativeDepth { index: usize, depth: i64 },
    #[error("the first node must be a root, found depth {depth}")]
    RootDepth { depth: i64 },
    #[error("depth at position {index} jumps from {prev} to {depth}")]
    DepthJump { index: usize, prev: i64, depth: i64 },
}
