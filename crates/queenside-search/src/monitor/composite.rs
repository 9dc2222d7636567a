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

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::ColumnNumeric,
    stats::SearchStatistics,
};
use queenside_model::{board::Board, placement::Placement, solution::Solution};

/// A composite monitor that aggregates multiple monitors and forwards
/// events to all of them. Termination is requested as soon as any inner
/// monitor requests it; the first `Terminate` command wins.
pub struct CompositeMonitor<'a, T> {
    monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>,
}

impl<'a, T> std::fmt::Debug for CompositeMonitor<'a, T>
where
    T: ColumnNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        f.debug_struct("CompositeMonitor")
            .field("monitors", &monitors_str)
            .finish()
    }
}

impl<'a, T> std::fmt::Display for CompositeMonitor<'a, T>
where
    T: ColumnNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        write!(f, "CompositeMonitor([{}])", monitors_str)
    }
}

impl<'a, T> Default for CompositeMonitor<'a, T>
where
    T: ColumnNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: ColumnNumeric,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new `CompositeMonitor` from a vector of boxed monitors.
    #[inline]
    pub fn from_vec(monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>) -> CompositeMonitor<'a, T> {
        CompositeMonitor { monitors }
    }

    /// Adds a monitor to the composite.
    #[inline]
    pub fn push<M>(&mut self, monitor: M)
    where
        M: SearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Returns the number of aggregated monitors.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if no monitor has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> SearchMonitor<T> for CompositeMonitor<'a, T>
where
    T: ColumnNumeric,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, board: &Board, statistics: &SearchStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_enter_search(board, statistics);
        }
    }

    fn on_descend(&mut self, placement: &Placement<T>, statistics: &SearchStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_descend(placement, statistics);
        }
    }

    fn on_backtrack(&mut self, placement: &Placement<T>, statistics: &SearchStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_backtrack(placement, statistics);
        }
    }

    fn on_solution_found(&mut self, solution: &Solution<T>, statistics: &SearchStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_solution_found(solution, statistics);
        }
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_exit_search(statistics);
        }
    }

    fn check_termination(&mut self, statistics: &SearchStatistics) -> SearchCommand {
        for monitor in self.monitors.iter_mut() {
            if let SearchCommand::Terminate(reason) = monitor.check_termination(statistics) {
                return SearchCommand::Terminate(reason);
            }
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::CompositeMonitor;
    use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
    use crate::stats::SearchStatistics;
    use queenside_model::{board::Board, placement::Placement, solution::Solution};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every event it observes into a shared log.
    struct RecordingMonitor {
        label: &'static str,
        log: Rc<RefCell<Vec<String>>>,
        terminate: bool,
    }

    impl RecordingMonitor {
        fn new(label: &'static str, log: Rc<RefCell<Vec<String>>>) -> Self {
            Self {
                label,
                log,
                terminate: false,
            }
        }

        fn terminating(label: &'static str, log: Rc<RefCell<Vec<String>>>) -> Self {
            Self {
                label,
                log,
                terminate: true,
            }
        }

        fn record(&self, event: &str) {
            self.log.borrow_mut().push(format!("{}:{}", self.label, event));
        }
    }

    impl SearchMonitor<u8> for RecordingMonitor {
        fn name(&self) -> &str {
            self.label
        }

        fn on_enter_search(&mut self, _board: &Board, _statistics: &SearchStatistics) {
            self.record("enter");
        }

        fn on_descend(&mut self, _placement: &Placement<u8>, _statistics: &SearchStatistics) {
            self.record("descend");
        }

        fn on_backtrack(&mut self, _placement: &Placement<u8>, _statistics: &SearchStatistics) {
            self.record("backtrack");
        }

        fn on_solution_found(&mut self, _solution: &Solution<u8>, _statistics: &SearchStatistics) {
            self.record("solution");
        }

        fn on_exit_search(&mut self, _statistics: &SearchStatistics) {
            self.record("exit");
        }

        fn check_termination(&mut self, _statistics: &SearchStatistics) -> SearchCommand {
            self.record("check");
            if self.terminate {
                SearchCommand::Terminate(format!("{} says stop", self.label))
            } else {
                SearchCommand::Continue
            }
        }
    }

    #[test]
    fn test_forwards_events_to_all_monitors_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositeMonitor::with_capacity(2);
        composite.push(RecordingMonitor::new("first", Rc::clone(&log)));
        composite.push(RecordingMonitor::new("second", Rc::clone(&log)));

        let board = Board::new(4);
        let stats = SearchStatistics::default();
        composite.on_enter_search(&board, &stats);
        composite.on_solution_found(&Solution::new(4, vec![1, 3, 0, 2]), &stats);
        composite.on_exit_search(&stats);

        assert_eq!(
            *log.borrow(),
            vec![
                "first:enter",
                "second:enter",
                "first:solution",
                "second:solution",
                "first:exit",
                "second:exit",
            ]
        );
    }

    #[test]
    fn test_first_terminate_wins() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositeMonitor::new();
        composite.push(RecordingMonitor::terminating("first", Rc::clone(&log)));
        composite.push(RecordingMonitor::new("second", Rc::clone(&log)));

        let stats = SearchStatistics::default();
        let command = composite.check_termination(&stats);

        assert!(matches!(
            command,
            SearchCommand::Terminate(reason) if reason == "first says stop"
        ));
        // The second monitor is not polled once the first terminates.
        assert_eq!(*log.borrow(), vec!["first:check"]);
    }

    #[test]
    fn test_empty_composite_continues() {
        let mut composite = CompositeMonitor::<u8>::new();
        assert!(composite.is_empty());
        assert_eq!(composite.len(), 0);
        assert!(matches!(
            composite.check_termination(&SearchStatistics::default()),
            SearchCommand::Continue
        ));
    }
}
