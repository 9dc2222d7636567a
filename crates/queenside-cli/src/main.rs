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

//! Enumerates all solutions of the classic 8-queens board, printing every
//! board layout as it is discovered followed by the total count.

use queenside_model::board::Board;
use queenside_search::backtrack::BacktrackSolver;
use queenside_search::monitor::render::RenderMonitor;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

/// The compiled-in board dimension.
const BOARD_SIZE: usize = 8;

fn main() -> ExitCode {
    let board = Board::new(BOARD_SIZE);
    let mut solver = BacktrackSolver::<u8>::preallocated(BOARD_SIZE);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let outcome = match solver.solve(&board, RenderMonitor::new(&mut out)) {
        Ok(outcome) => outcome,
        Err(error) => {
            eprintln!("queenside: {}", error);
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = writeln!(out, "{}", outcome.solutions_found()).and_then(|_| out.flush()) {
        eprintln!("queenside: {}", error);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
