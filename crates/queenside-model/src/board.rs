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

/// The problem definition: a square board of dimension `size`.
///
/// A board of size `n` has `n` rows, `n` columns, and asks for `n` queens,
/// one per row. The board carries no placement state of its own; the search
/// engine keeps that in a `Placement` and reports full boards as `Solution`s.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    size: usize,
}

impl Board {
    /// Creates a new board of the given dimension.
    ///
    /// A dimension of zero is a valid (empty) board with exactly one trivial
    /// solution.
    #[inline]
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Returns the board dimension (rows = columns = queens).
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the theoretical complexity of enumerating this board.
    #[inline]
    pub fn complexity(&self) -> Complexity {
        Complexity::new(self.size)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({0}x{0})", self.size)
    }
}

/// Represents the theoretical size of the unpruned search tree for a board.
///
/// Placing one queen per row with `n` candidate columns at every depth spans
/// a tree with $n^k$ nodes at level $k$, so the total node count is
/// $\sum_{k=0}^{n} n^k$. Since this exceeds standard integer limits long
/// before interesting board sizes, the value is stored in **logarithmic
/// space** ($\log_{10}$).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Complexity {
    /// The base-10 logarithm of the total node count.
    log_val: f64,
}

impl Complexity {
    /// Calculates the complexity for a board of the given dimension.
    pub fn new(size: usize) -> Self {
        if size == 0 {
            return Complexity { log_val: 0.0 }; // 1 node (root), log10(1) = 0
        }

        // Every level multiplies the node count by the branching factor n,
        // so log10(L_k) = k * log10(n). The running total is accumulated in
        // log space to avoid overflow.
        let branching_log = (size as f64).log10();

        // Helper to compute log10(10^a + 10^b)
        let log10_add = |a: f64, b: f64| -> f64 {
            let max = a.max(b);
            let min = a.min(b);
            // Factor out 10^max: 10^max * (1 + 10^(min-max))
            max + (1.0 + 10.0_f64.powf(min - max)).log10()
        };

        let mut current_level_log = 0.0; // Level 0 has 1 node, log10(1) = 0.0
        let mut total_sum_log = 0.0;

        for _level in 1..=size {
            current_level_log += branching_log;
            total_sum_log = log10_add(total_sum_log, current_level_log);
        }

        Complexity {
            log_val: total_sum_log,
        }
    }

    /// Returns the percentage of the search tree that was actually visited.
    /// Returns None if the tree size degenerates to zero.
    pub fn coverage(&self, nodes_explored: u64) -> Option<f64> {
        if self.log_val > 15.0 {
            return Some(0.0);
        }

        let total_size = 10.0_f64.powf(self.log_val);
        if total_size == 0.0 {
            return None;
        }

        Some((nodes_explored as f64 / total_size) * 100.0)
    }

    /// Returns the exponent (order of magnitude) of the tree size.
    #[inline]
    pub fn exponent(&self) -> u64 {
        self.log_val.floor() as u64
    }
}

impl std::fmt::Debug for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Complexity(~10^{:.2})", self.log_val)
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "~10^{}", self.exponent())
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, Complexity};

    #[test]
    fn test_board_reports_dimension() {
        let board = Board::new(8);
        assert_eq!(board.size(), 8);
        assert_eq!(format!("{}", board), "Board(8x8)");
    }

    #[test]
    fn test_empty_board_has_single_node_tree() {
        let complexity = Complexity::new(0);
        assert_eq!(complexity.exponent(), 0);
        // The whole tree is one root node, so visiting it is full coverage.
        let coverage = complexity.coverage(1).unwrap();
        assert!((coverage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_unit_board_counts_root_and_leaf() {
        // Size 1: root plus a single leaf, log10(2).
        let complexity = Complexity::new(1);
        assert_eq!(complexity.exponent(), 0);
        let coverage = complexity.coverage(2).unwrap();
        assert!((coverage - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_classic_board_order_of_magnitude() {
        // Size 8: the leaf level alone is 8^8 = 16_777_216 nodes, and the
        // geometric sum of the shallower levels does not change the order
        // of magnitude.
        let complexity = Board::new(8).complexity();
        assert_eq!(complexity.exponent(), 7);
    }

    #[test]
    fn test_large_board_coverage_saturates_to_zero() {
        // Size 20 spans ~10^26 nodes, far beyond what any run explores.
        let complexity = Complexity::new(20);
        assert!(complexity.exponent() > 15);
        assert_eq!(complexity.coverage(u64::MAX), Some(0.0));
    }
}
