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

use crate::{num::ColumnNumeric, stats::SearchStatistics};
use queenside_model::{board::Board, placement::Placement, solution::Solution};

/// Command returned by a monitor to control the search process.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    /// Keep searching.
    #[default]
    Continue,
    /// Stop the search; the string carries the reason.
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Trait for monitoring and controlling the backtracking search.
///
/// The engine drives the hooks; a monitor never mutates the search state it
/// observes. `check_termination` is polled at every node entry, so a
/// `Terminate` command unwinds the search promptly.
pub trait SearchMonitor<T>
where
    T: ColumnNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once before the search starts.
    fn on_enter_search(&mut self, board: &Board, statistics: &SearchStatistics);

    /// Called after a queen has been placed and the search moved down a
    /// row. The placement shows the new, conflict-free prefix.
    fn on_descend(&mut self, placement: &Placement<T>, statistics: &SearchStatistics);

    /// Called after the search moved back up a row. The placement shows
    /// the prefix as it was before the undone descent.
    fn on_backtrack(&mut self, placement: &Placement<T>, statistics: &SearchStatistics);

    /// Called when a complete, conflict-free placement is reached.
    fn on_solution_found(&mut self, solution: &Solution<T>, statistics: &SearchStatistics);

    /// Called once when the search is finished (exhausted or aborted).
    fn on_exit_search(&mut self, statistics: &SearchStatistics);

    /// Polled at every node entry. Returning `Terminate` unwinds the
    /// search and yields an aborted outcome.
    fn check_termination(&mut self, _statistics: &SearchStatistics) -> SearchCommand {
        SearchCommand::Continue
    }
}

/// A mutable reference forwards to the monitor it points at, so a caller
/// can keep inspecting a monitor after handing it to a solve.
impl<T, M> SearchMonitor<T> for &mut M
where
    T: ColumnNumeric,
    M: SearchMonitor<T> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_enter_search(&mut self, board: &Board, statistics: &SearchStatistics) {
        (**self).on_enter_search(board, statistics);
    }

    fn on_descend(&mut self, placement: &Placement<T>, statistics: &SearchStatistics) {
        (**self).on_descend(placement, statistics);
    }

    fn on_backtrack(&mut self, placement: &Placement<T>, statistics: &SearchStatistics) {
        (**self).on_backtrack(placement, statistics);
    }

    fn on_solution_found(&mut self, solution: &Solution<T>, statistics: &SearchStatistics) {
        (**self).on_solution_found(solution, statistics);
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        (**self).on_exit_search(statistics);
    }

    fn check_termination(&mut self, statistics: &SearchStatistics) -> SearchCommand {
        (**self).check_termination(statistics)
    }
}

impl<'a, T> std::fmt::Debug for dyn SearchMonitor<T> + 'a
where
    T: ColumnNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<'a, T> std::fmt::Display for dyn SearchMonitor<T> + 'a
where
    T: ColumnNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::SearchCommand;

    #[test]
    fn test_default_command_is_continue() {
        assert_eq!(SearchCommand::default(), SearchCommand::Continue);
    }

    #[test]
    fn test_display_carries_termination_reason() {
        assert_eq!(format!("{}", SearchCommand::Continue), "Continue");
        assert_eq!(
            format!("{}", SearchCommand::Terminate("limit".to_string())),
            "Terminate: limit"
        );
    }
}
