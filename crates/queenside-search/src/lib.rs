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

//! # Queenside Search
//!
//! Exhaustive backtracking enumeration for the N-Queens problem. The engine
//! fills a board row by row, rejecting candidate columns that clash with the
//! already-placed prefix, and reports every full placement it reaches.
//!
//! ## Modules
//!
//! - `backtrack`: The `BacktrackSolver` engine with reusable placement
//!   scratch and monitor-driven termination.
//! - `monitor`: Pluggable observers of the search lifecycle (rendering,
//!   counting, limits, composition).
//! - `stats`: Counters collected during a solve.
//! - `result`: The `SearchOutcome` returned after termination.
//! - `error`: Boundary validation failures.
//! - `num`: The `ColumnNumeric` trait alias bounding the column type.
//!
//! ## Guarantees
//!
//! Candidate columns are tried in ascending order at every depth and the
//! search never takes a first-match shortcut, so solutions are discovered in
//! lexicographic order over the column choices per row and repeated runs
//! produce identical output.

pub mod backtrack;
pub mod error;
pub mod monitor;
pub mod num;
pub mod result;
pub mod stats;
