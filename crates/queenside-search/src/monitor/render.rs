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

//! # Render Monitor
//!
//! Writes every discovered solution's board layout to an `io::Write` sink,
//! interleaved with the search in discovery order. Each board is followed
//! by one blank separator line, so an empty (size 0) solution produces
//! exactly one blank line.
//!
//! The sink is generic: production wires a buffered stdout, tests capture
//! the stream in a `Vec<u8>`. The first write error is recorded and all
//! further output is suppressed; the sink is flushed when the search exits.

use crate::{
    monitor::search_monitor::SearchMonitor,
    num::ColumnNumeric,
    stats::SearchStatistics,
};
use queenside_model::{board::Board, placement::Placement, solution::Solution};
use std::io::Write;

/// A monitor that renders every solution to a writer as it is discovered.
#[derive(Debug)]
pub struct RenderMonitor<W> {
    writer: W,
    error: Option<std::io::Error>,
}

impl<W> RenderMonitor<W>
where
    W: Write,
{
    /// Creates a new `RenderMonitor` writing to `writer`.
    #[inline]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Returns the first write error encountered, if any.
    #[inline]
    pub fn io_error(&self) -> Option<&std::io::Error> {
        self.error.as_ref()
    }

    /// Consumes the monitor and returns the writer.
    #[inline]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_solution<T>(&mut self, solution: &Solution<T>) -> std::io::Result<()>
    where
        T: ColumnNumeric,
    {
        // The Display impl ends with a newline after the last row, so one
        // more newline yields the blank separator line.
        writeln!(self.writer, "{}", solution)
    }
}

impl<W, T> SearchMonitor<T> for RenderMonitor<W>
where
    W: Write,
    T: ColumnNumeric,
{
    fn name(&self) -> &str {
        "RenderMonitor"
    }

    fn on_enter_search(&mut self, _board: &Board, _statistics: &SearchStatistics) {}

    fn on_descend(&mut self, _placement: &Placement<T>, _statistics: &SearchStatistics) {}

    fn on_backtrack(&mut self, _placement: &Placement<T>, _statistics: &SearchStatistics) {}

    fn on_solution_found(&mut self, solution: &Solution<T>, _statistics: &SearchStatistics) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.write_solution(solution) {
            self.error = Some(error);
        }
    }

    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.writer.flush() {
            self.error = Some(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RenderMonitor;
    use crate::monitor::search_monitor::SearchMonitor;
    use crate::stats::SearchStatistics;
    use queenside_model::solution::Solution;
    use std::io::{self, Write};

    #[test]
    fn test_renders_boards_in_event_order_with_separators() {
        let mut buffer = Vec::new();
        let mut monitor = RenderMonitor::new(&mut buffer);
        let stats = SearchStatistics::default();

        monitor.on_solution_found(&Solution::<u8>::new(4, vec![1, 3, 0, 2]), &stats);
        monitor.on_solution_found(&Solution::<u8>::new(4, vec![2, 0, 3, 1]), &stats);
        SearchMonitor::<u8>::on_exit_search(&mut monitor, &stats);

        assert!(monitor.io_error().is_none());
        drop(monitor);
        let rendered = String::from_utf8(buffer).unwrap();
        assert_eq!(
            rendered,
            ".O..\n...O\nO...\n..O.\n\n..O.\nO...\n...O\n.O..\n\n"
        );
    }

    #[test]
    fn test_empty_solution_renders_single_blank_line() {
        let mut buffer = Vec::new();
        let mut monitor = RenderMonitor::new(&mut buffer);
        let stats = SearchStatistics::default();

        monitor.on_solution_found(&Solution::<u8>::new(0, vec![]), &stats);
        SearchMonitor::<u8>::on_exit_search(&mut monitor, &stats);

        drop(monitor);
        assert_eq!(buffer, b"\n");
    }

    /// A writer whose every write fails.
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }
    }

    #[test]
    fn test_first_write_error_is_recorded_and_sticky() {
        let mut monitor = RenderMonitor::new(FailingWriter);
        let stats = SearchStatistics::default();

        monitor.on_solution_found(&Solution::<u8>::new(1, vec![0]), &stats);
        assert!(monitor.io_error().is_some());

        // Further events must not clobber the recorded error.
        monitor.on_solution_found(&Solution::<u8>::new(1, vec![0]), &stats);
        SearchMonitor::<u8>::on_exit_search(&mut monitor, &stats);
        assert_eq!(
            monitor.io_error().map(|e| e.kind()),
            Some(io::ErrorKind::BrokenPipe)
        );
    }
}
