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

use crate::index::{ColumnIndex, RowIndex};
use fixedbitset::FixedBitSet;
use num_traits::{PrimInt, Unsigned};

/// Glyph emitted for a cell occupied by a queen.
const QUEEN_GLYPH: char = 'O';

/// Glyph emitted for an empty cell.
const EMPTY_GLYPH: char = '.';

/// A fully placed board: one queen per row.
///
/// Data is held as one column value per row, indexed directly by row (i.e.,
/// index `i` corresponds to row `i`). Solutions are immutable; the search
/// engine materializes one at every leaf of the tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Solution<T> {
    /// The board dimension this solution fills.
    size: usize,

    /// The occupied column for each row.
    /// `columns[r]` is the column of the queen in row `r`.
    columns: Vec<T>,
}

impl<T> Solution<T>
where
    T: PrimInt + Unsigned,
{
    /// Constructs a new `Solution`.
    ///
    /// # Panics
    ///
    /// Panics if `columns` does not hold exactly `size` entries, or if any
    /// entry does not address a column on a board of this dimension.
    pub fn new(size: usize, columns: Vec<T>) -> Self {
        assert_eq!(
            columns.len(),
            size,
            "called Solution::new with inconsistent dimensions: size = {}, columns.len() = {}",
            size,
            columns.len()
        );
        assert!(
            columns
                .iter()
                .all(|column| column.to_usize().is_some_and(|c| c < size)),
            "called Solution::new with a column outside the board"
        );

        Self { size, columns }
    }

    /// Returns the number of rows (= columns = queens) of this solution.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.size
    }

    /// Returns the column occupied in a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn column_in_row(&self, row: RowIndex) -> ColumnIndex {
        let index = row.get();
        assert!(
            index < self.size,
            "called `Solution::column_in_row` with row index out of bounds: the len is {} but the index is {}",
            self.size,
            index
        );

        match self.columns[index].to_usize() {
            Some(column) => ColumnIndex::new(column),
            // Column values are range-checked in `new`.
            None => unreachable!("column validated at construction"),
        }
    }

    /// Returns a slice of occupied columns for all rows.
    #[inline]
    pub fn columns(&self) -> &[T] {
        &self.columns
    }

    /// Checks the placement invariant: no two queens share a column, a
    /// diagonal, or an anti-diagonal.
    ///
    /// This is validation of an already-built solution, not part of the
    /// search itself; the engine rejects conflicting candidates before they
    /// ever reach a leaf.
    pub fn is_conflict_free(&self) -> bool {
        let diagonal_len = (2 * self.size).saturating_sub(1);
        let mut occupied_columns = FixedBitSet::with_capacity(self.size);
        let mut occupied_diagonals = FixedBitSet::with_capacity(diagonal_len);
        let mut occupied_anti_diagonals = FixedBitSet::with_capacity(diagonal_len);

        for (row, column) in self.columns.iter().enumerate() {
            let column = match column.to_usize() {
                Some(column) => column,
                None => return false,
            };

            // Two queens clash on a diagonal iff row - column matches, and
            // on an anti-diagonal iff row + column matches. The diagonal
            // index is shifted by size - 1 to stay nonnegative.
            let diagonal = row + self.size - 1 - column;
            let anti_diagonal = row + column;

            if occupied_columns.put(column)
                || occupied_diagonals.put(diagonal)
                || occupied_anti_diagonals.put(anti_diagonal)
            {
                return false;
            }
        }

        true
    }
}

impl<T> std::fmt::Display for Solution<T>
where
    T: PrimInt + Unsigned,
{
    /// Renders the board layout, one row per line, `O` for a queen and `.`
    /// for an empty cell. An empty (size 0) solution renders nothing.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            let occupied = self.columns[row].to_usize();
            for column in 0..self.size {
                if occupied == Some(column) {
                    write!(f, "{}", QUEEN_GLYPH)?;
                } else {
                    write!(f, "{}", EMPTY_GLYPH)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Solution;
    use crate::index::{ColumnIndex, RowIndex};

    #[test]
    fn test_render_known_solution() {
        let solution = Solution::<u8>::new(4, vec![1, 3, 0, 2]);
        assert_eq!(format!("{}", solution), ".O..\n...O\nO...\n..O.\n");
    }

    #[test]
    fn test_render_empty_board_is_empty() {
        let solution = Solution::<u8>::new(0, vec![]);
        assert_eq!(format!("{}", solution), "");
    }

    #[test]
    fn test_column_in_row_returns_typed_column() {
        let solution = Solution::<u8>::new(4, vec![1, 3, 0, 2]);
        assert_eq!(solution.column_in_row(RowIndex::new(1)), ColumnIndex::new(3));
    }

    #[test]
    fn test_conflict_free_accepts_valid_solution() {
        let solution = Solution::<u8>::new(4, vec![1, 3, 0, 2]);
        assert!(solution.is_conflict_free());

        let solution = Solution::<u8>::new(4, vec![2, 0, 3, 1]);
        assert!(solution.is_conflict_free());
    }

    #[test]
    fn test_conflict_free_rejects_shared_column() {
        let solution = Solution::<u8>::new(3, vec![0, 2, 0]);
        assert!(!solution.is_conflict_free());
    }

    #[test]
    fn test_conflict_free_rejects_shared_diagonal() {
        // (0,0) and (1,1) share the main diagonal.
        let solution = Solution::<u8>::new(2, vec![0, 1]);
        assert!(!solution.is_conflict_free());
    }

    #[test]
    fn test_conflict_free_rejects_shared_anti_diagonal() {
        // (0,1) and (1,0) share an anti-diagonal.
        let solution = Solution::<u8>::new(2, vec![1, 0]);
        assert!(!solution.is_conflict_free());
    }

    #[test]
    fn test_trivial_solutions_are_conflict_free() {
        assert!(Solution::<u8>::new(0, vec![]).is_conflict_free());
        assert!(Solution::<u8>::new(1, vec![0]).is_conflict_free());
    }

    #[test]
    #[should_panic(expected = "inconsistent dimensions")]
    fn test_new_rejects_wrong_row_count() {
        let _ = Solution::<u8>::new(4, vec![1, 3, 0]);
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn test_new_rejects_column_off_the_board() {
        let _ = Solution::<u8>::new(2, vec![0, 2]);
    }
}
