use std::convert::Infallible;

use crate::forest::{FlatHierarchy, Hierarchy};
use crate::memory::IntList;

/// Derives the sub-forest of nodes whose id passes `predicate` and whose
/// ancestors all pass it as well.
///
/// Surviving nodes keep their original id and depth; depths are never
/// renumbered against the reduced forest. Relative preorder among survivors
/// is preserved. The source hierarchy is left untouched and may be filtered
/// again with a different predicate.
///
/// Runs in a single forward pass, *O*(n) time, with no recursion. Nodes
/// inside a rejected subtree are skipped without consulting the predicate.
///
/// # Examples
///
/// ```
/// use flatforest::{filter, FlatHierarchy, Hierarchy};
///
/// let forest = FlatHierarchy::new(
///     vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
///     vec![0, 1, 2, 3, 1, 0, 1, 0, 1, 1, 2],
/// )
/// .unwrap();
///
/// let reduced = filter(&forest, |id| id % 3 != 0);
/// assert_eq!(reduced.format_string(), "[1:0, 2:1, 5:1, 8:0, 10:1, 11:2]");
/// ```
pub fn filter<H>(hierarchy: &H, mut predicate: impl FnMut(i64) -> bool) -> FlatHierarchy
where
    H: Hierarchy + ?Sized,
{
    try_filter(hierarchy, |id| Ok::<_, Infallible>(predicate(id)))
        .unwrap_or_else(|error| match error {})
}

/// Fallible variant of [`filter`].
///
/// The first error returned by the predicate aborts the pass and is passed
/// through to the caller; no partial hierarchy escapes.
///
/// # Errors
///
/// Returns the predicate's error unchanged.
///
/// # Examples
///
/// ```
/// use flatforest::{try_filter, FlatHierarchy, Hierarchy};
///
/// let forest = FlatHierarchy::new(vec![1, 11, 2], vec![0, 1, 0]).unwrap();
///
/// let reduced = try_filter(&forest, |id| {
///     if id < 0 {
///         return Err("negative id");
///     }
///     Ok(id != 1)
/// })?;
/// assert_eq!(reduced.format_string(), "[2:0]");
/// # Ok::<(), &'static str>(())
/// ```
pub fn try_filter<H, E>(
    hierarchy: &H,
    mut predicate: impl FnMut(i64) -> Result<bool, E>,
) -> Result<FlatHierarchy, E>
where
    H: Hierarchy + ?Sized,
{
    let len = hierarchy.len();
    let mut ids = IntList::with_capacity(len);
    let mut depths = IntList::with_capacity(len);

    // Depth of the most recent rejected node. While set, every strictly
    // deeper node belongs to that node's subtree; the first node at the same
    // depth or shallower lies outside it and clears the block.
    let mut blocked_depth: Option<i64> = None;

    for index in 0..len {
        let depth = hierarchy.depth(index);

        if let Some(blocked) = blocked_depth {
            if depth > blocked {
                continue;
            }
            blocked_depth = None;
        }

        let id = hierarchy.node_id(index);

        if predicate(id)? {
            ids.push(id);
            depths.push(depth);
        } else {
            blocked_depth = Some(depth);
        }
    }

    Ok(FlatHierarchy::from_buffers_unchecked(ids, depths))
}
