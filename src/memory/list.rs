use std::fmt::Debug;
use std::ops::Index;

/// A growable sequence of 64-bit integers.
///
/// Appending is amortized *O*(1) and random reads are *O*(1). Result
/// sequences produced by filtering are accumulated in these buffers, sized up
/// front to at most the input size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntList {
    data: Vec<i64>,
}

impl IntList {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a new empty list with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Appends a value to the end of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flatforest::memory::IntList;
    /// let mut list = IntList::new();
    /// list.push(1);
    /// list.push(2);
    /// list.push(3);
    /// assert_eq!(list.as_slice(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn push(&mut self, value: i64) {
        self.data.push(value);
    }

    /// Returns the value at `index`, or `None` if it is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<i64> {
        self.data.get(index).copied()
    }

    /// Returns the number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether there is no stored value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrows the contents as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }
}

impl Index<usize> for IntList {
    type Output = i64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl From<Vec<i64>> for IntList {
    fn from(data: Vec<i64>) -> Self {
        Self { data }
    }
}

impl FromIterator<i64> for IntList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            data: Vec::from_iter(iter),
        }
    }
}

impl Extend<i64> for IntList {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}
