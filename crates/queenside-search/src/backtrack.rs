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

//! Exhaustive backtracking enumeration of N-Queens placements.
//!
//! This module implements a stateful search engine that fills a board row
//! by row. At every depth each candidate column is checked against the
//! already-placed prefix: a candidate is rejected when it shares a column
//! with a placed queen or when its column distance to a placed queen equals
//! the row distance (a diagonal clash). Accepted candidates are pushed onto
//! the placement, the engine recurses into the next row, and the placement
//! is truncated back on return, so callers at shallower depths only ever
//! observe their own validated prefix.
//!
//! The solver manages a reusable placement buffer, supports preallocation
//! for repeated solves, and delegates rendering, counting, and termination
//! to pluggable `SearchMonitor`s. All candidate columns are tried at every
//! depth; reaching the full board depth accounts exactly one solution, so
//! the returned count is the exact number of distinct placements when the
//! search runs to exhaustion.

use crate::{
    error::SolveError,
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::ColumnNumeric,
    result::SearchOutcome,
    stats::SearchStatistics,
};
use queenside_model::{board::Board, placement::Placement, solution::Solution};
use std::time::Instant;

/// An exhaustive backtracking solver for the N-Queens problem.
///
/// The solver is just the execution engine: observation of the search and
/// early termination are delegated to a `SearchMonitor`.
#[derive(Clone, Debug, Default)]
pub struct BacktrackSolver<T>
where
    T: ColumnNumeric,
{
    placement: Placement<T>,
}

impl<T> BacktrackSolver<T>
where
    T: ColumnNumeric,
{
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            placement: Placement::new(),
        }
    }

    /// Creates a new solver instance with preallocated storage for the
    /// given board dimension.
    ///
    /// # Note
    ///
    /// When invoked, the solver internally ensures that the placement has
    /// sufficient capacity for the given board, so preallocating only moves
    /// the cost of the allocation to construction time.
    #[inline]
    pub fn preallocated(size: usize) -> Self {
        Self {
            placement: Placement::with_capacity(size),
        }
    }

    /// Enumerates all solutions of the given board.
    ///
    /// Candidate columns are tried in ascending order at every depth, so
    /// solutions are reported to the monitor in lexicographic order over
    /// the column choices per row. The search runs to exhaustion unless the
    /// monitor issues a `Terminate` command, in which case the outcome is
    /// aborted and carries the statistics collected so far.
    ///
    /// # Errors
    ///
    /// Fails fast with `SolveError::BoardTooLarge` if the board dimension
    /// is not representable in the column type `T`.
    pub fn solve<M>(&mut self, board: &Board, mut monitor: M) -> Result<SearchOutcome, SolveError>
    where
        M: SearchMonitor<T>,
    {
        let size = board.size();
        if T::from_usize(size).is_none() {
            return Err(SolveError::BoardTooLarge {
                size,
                limit: T::max_value().to_usize().unwrap_or(usize::MAX),
            });
        }

        self.placement.clear();
        self.placement.ensure_capacity(size);

        let mut statistics = SearchStatistics::default();
        monitor.on_enter_search(board, &statistics);

        let start = Instant::now();
        let mut session = SearchSession {
            size,
            placement: &mut self.placement,
            statistics: &mut statistics,
            monitor: &mut monitor,
            stop_reason: None,
        };
        let solutions = session.descend(0);
        let stop_reason = session.stop_reason;
        statistics.time_total = start.elapsed();

        debug_assert_eq!(
            solutions, statistics.solutions_found,
            "solution count returned by the recursion diverged from the statistics counter"
        );

        monitor.on_exit_search(&statistics);

        Ok(match stop_reason {
            Some(reason) => SearchOutcome::aborted(reason, statistics),
            None => SearchOutcome::exhausted(statistics),
        })
    }
}

/// Per-solve state: the board dimension, the shared placement prefix, the
/// statistics, the monitor, and the first termination reason observed.
struct SearchSession<'a, T, M>
where
    T: ColumnNumeric,
    M: SearchMonitor<T>,
{
    size: usize,
    placement: &'a mut Placement<T>,
    statistics: &'a mut SearchStatistics,
    monitor: &'a mut M,
    stop_reason: Option<String>,
}

impl<'a, T, M> SearchSession<'a, T, M>
where
    T: ColumnNumeric,
    M: SearchMonitor<T>,
{
    /// Fills `depth` and all rows below it, returning the number of
    /// solutions found in this subtree.
    ///
    /// Precondition: the placement holds a conflict-free prefix of exactly
    /// `depth` rows.
    fn descend(&mut self, depth: usize) -> u64 {
        if let SearchCommand::Terminate(reason) = self.monitor.check_termination(self.statistics) {
            if self.stop_reason.is_none() {
                self.stop_reason = Some(reason);
            }
            return 0;
        }

        self.statistics.on_node_explored();
        self.statistics.on_depth_update(depth as u64);

        if depth == self.size {
            let solution = Solution::new(self.size, self.placement.columns().to_vec());
            self.statistics.on_solution_found();
            self.monitor.on_solution_found(&solution, self.statistics);
            return 1;
        }

        let mut solutions = 0u64;
        for candidate in 0..self.size {
            if self.stop_reason.is_some() {
                break;
            }

            // The dimension is validated against T up front, so every
            // candidate below it converts.
            let Some(column) = T::from_usize(candidate) else {
                break;
            };

            if self.conflicts(depth, column) {
                self.statistics.on_candidate_rejected();
                continue;
            }

            self.placement.push(column);
            self.monitor.on_descend(self.placement, self.statistics);

            solutions += self.descend(depth + 1);

            self.placement.truncate(depth);
            self.statistics.on_backtrack();
            self.monitor.on_backtrack(self.placement, self.statistics);
        }

        solutions
    }

    /// Checks a candidate column for row `depth` against every placed row:
    /// a clash is a shared column, or a column distance equal to the row
    /// distance (shared diagonal or anti-diagonal).
    fn conflicts(&self, depth: usize, candidate: T) -> bool {
        for (row, &placed) in self.placement.columns().iter().enumerate() {
            if placed == candidate {
                return true;
            }

            let column_distance = if placed > candidate {
                placed - candidate
            } else {
                candidate - placed
            };
            if T::from_usize(depth - row) == Some(column_distance) {
                return true;
            }
        }
        false
    }
}
