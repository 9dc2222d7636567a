// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The mutable board state of a running search.
//!
//! A `Placement` maps each already-filled row to the column its queen
//! occupies. Only the prefix `[0, len)` is meaningful: the search engine
//! pushes a column when it descends into a row and truncates back when it
//! backtracks, so a reader can never observe a stale slot. The backing
//! storage keeps its capacity across `clear`, which lets a solver reuse one
//! placement across many solves without reallocating.

use crate::index::RowIndex;
use smallvec::SmallVec;

/// Inline capacity of the backing storage. Boards up to this dimension
/// never touch the heap.
const INLINE_ROWS: usize = 16;

/// A column-per-row prefix placement, generic over the column storage
/// integer `T`.
///
/// Small unsigned column types keep the hot prefix dense; the search engine
/// constrains `T` to the integer capabilities it needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement<T> {
    columns: SmallVec<[T; INLINE_ROWS]>,
}

impl<T> Default for Placement<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Placement<T> {
    /// Creates a new empty placement.
    #[inline]
    pub fn new() -> Self {
        Self {
            columns: SmallVec::new(),
        }
    }

    /// Creates a new empty placement with storage for at least `capacity`
    /// rows.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: SmallVec::with_capacity(capacity),
        }
    }

    /// Ensures the backing storage can hold at least `capacity` rows
    /// without reallocating mid-search.
    #[inline]
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if capacity > self.columns.capacity() {
            self.columns.reserve(capacity - self.columns.len());
        }
    }

    /// Returns the number of rows the backing storage can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.columns.capacity()
    }

    /// Returns the number of placed rows (the current search depth).
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if no row has been placed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Places a queen in the next unfilled row.
    #[inline]
    pub fn push(&mut self, column: T) {
        self.columns.push(column);
    }

    /// Truncates the placement back to `len` rows, undoing deeper
    /// placements. Has no effect if `len` is not smaller than the current
    /// depth.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.columns.truncate(len);
    }

    /// Removes all placed rows, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.columns.clear();
    }

    /// Returns the placed prefix as a slice, indexed by row.
    #[inline]
    pub fn columns(&self) -> &[T] {
        &self.columns
    }
}

impl<T> Placement<T>
where
    T: Copy,
{
    /// Returns the column placed in `row`, or `None` if that row has not
    /// been filled yet.
    #[inline]
    pub fn column_in_row(&self, row: RowIndex) -> Option<T> {
        self.columns.get(row.get()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::Placement;
    use crate::index::RowIndex;

    #[test]
    fn test_push_grows_the_prefix() {
        let mut placement = Placement::<u8>::new();
        assert!(placement.is_empty());

        placement.push(1);
        placement.push(3);

        assert_eq!(placement.len(), 2);
        assert_eq!(placement.columns(), &[1, 3]);
    }

    #[test]
    fn test_only_the_prefix_is_observable() {
        let mut placement = Placement::<u8>::new();
        placement.push(1);
        placement.push(3);

        assert_eq!(placement.column_in_row(RowIndex::new(0)), Some(1));
        assert_eq!(placement.column_in_row(RowIndex::new(1)), Some(3));
        // Rows beyond the prefix do not exist, stale or otherwise.
        assert_eq!(placement.column_in_row(RowIndex::new(2)), None);
    }

    #[test]
    fn test_truncate_undoes_deeper_placements() {
        let mut placement = Placement::<u8>::new();
        placement.push(1);
        placement.push(3);
        placement.push(0);

        placement.truncate(1);

        assert_eq!(placement.columns(), &[1]);
        assert_eq!(placement.column_in_row(RowIndex::new(1)), None);

        // Truncating to a larger length is a no-op.
        placement.truncate(4);
        assert_eq!(placement.len(), 1);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut placement = Placement::<u16>::with_capacity(100);
        for column in 0..100u16 {
            placement.push(column);
        }

        let capacity = placement.capacity();
        placement.clear();

        assert!(placement.is_empty());
        assert_eq!(placement.capacity(), capacity);
    }

    #[test]
    fn test_ensure_capacity_is_monotonic() {
        let mut placement = Placement::<u8>::new();
        placement.ensure_capacity(64);
        assert!(placement.capacity() >= 64);

        // Asking for less never shrinks.
        placement.ensure_capacity(8);
        assert!(placement.capacity() >= 64);
    }
}
