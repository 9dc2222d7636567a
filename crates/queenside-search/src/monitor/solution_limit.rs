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

//! # Solution Limit Monitor
//!
//! Tracks the number of solutions discovered using a shared `AtomicU64`
//! counter, and optionally terminates the search when a configured global
//! limit is reached. Multiple monitors can share the same counter to
//! enforce a cross-component limit.

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::ColumnNumeric,
    stats::SearchStatistics,
};
use queenside_model::{board::Board, placement::Placement, solution::Solution};
use std::sync::atomic::{AtomicU64, Ordering};

/// A monitor that terminates the search once a specified number of
/// solutions has been found, or continues indefinitely if no limit is set,
/// just updating the shared solution count.
#[derive(Debug)]
pub struct SolutionLimitMonitor<'a, T> {
    solutions_found: &'a AtomicU64,
    solution_limit: Option<u64>,
    _phantom: std::marker::PhantomData<T>,
}

impl<'a, T> SolutionLimitMonitor<'a, T>
where
    T: ColumnNumeric,
{
    /// Creates a new `SolutionLimitMonitor`.
    #[inline]
    pub fn new(solutions_found: &'a AtomicU64, solution_limit: Option<u64>) -> Self {
        Self {
            solutions_found,
            solution_limit,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Creates a new `SolutionLimitMonitor` with a specified solution limit.
    #[inline]
    pub fn with_limit(solutions_found: &'a AtomicU64, limit: u64) -> Self {
        Self::new(solutions_found, Some(limit))
    }

    /// Creates a new `SolutionLimitMonitor` without a solution limit.
    #[inline]
    pub fn without_limit(solutions_found: &'a AtomicU64) -> Self {
        Self::new(solutions_found, None)
    }

    /// Checks if the solution limit has been reached.
    #[inline]
    fn reached_limit(&self) -> bool {
        if let Some(limit) = self.solution_limit {
            return self.solutions_found.load(Ordering::Relaxed) >= limit;
        }
        false
    }
}

impl<'a, T> SearchMonitor<T> for SolutionLimitMonitor<'a, T>
where
    T: ColumnNumeric,
{
    fn name(&self) -> &str {
        "SolutionLimitMonitor"
    }

    fn on_enter_search(&mut self, _board: &Board, _statistics: &SearchStatistics) {}

    fn on_descend(&mut self, _placement: &Placement<T>, _statistics: &SearchStatistics) {}

    fn on_backtrack(&mut self, _placement: &Placement<T>, _statistics: &SearchStatistics) {}

    fn on_solution_found(&mut self, _solution: &Solution<T>, _statistics: &SearchStatistics) {
        self.solutions_found.fetch_add(1, Ordering::Relaxed);
    }

    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    fn check_termination(&mut self, _statistics: &SearchStatistics) -> SearchCommand {
        if self.reached_limit() {
            SearchCommand::Terminate("global solution limit reached".to_string())
        } else {
            SearchCommand::Continue
        }
    }
}
