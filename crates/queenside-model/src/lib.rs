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

//! # Queenside Model
//!
//! **The Core Domain Model for the Queenside N-Queens Enumerator.**
//!
//! This crate defines the fundamental data structures used to represent an
//! N-Queens placement problem. It serves as the data interchange layer between
//! the problem definition (the board dimension) and the search engine
//! (`queenside_search`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation between the **problem**,
//! the **in-flight search state**, and the **result**:
//!
//! * **`index`**: Strongly-typed wrappers (`RowIndex`, `ColumnIndex`) to
//!   prevent logical indexing errors between the two index spaces.
//! * **`board`**: The immutable `Board` problem definition, together with a
//!   log-space `Complexity` estimate of the unpruned search tree.
//! * **`placement`**: The mutable column-per-row prefix that the search
//!   engine grows and truncates while backtracking.
//! * **`solution`**: An immutable, fully-placed board with validation and a
//!   text rendering of the layout.
//!
//! ## Design Philosophy
//!
//! 1. **Type Safety**: Rows and columns are distinct index types. You cannot
//!    accidentally use a `RowIndex` to address a column.
//! 2. **Prefix Semantics**: Only the validated prefix of a `Placement` is
//!    observable; stale slots beyond the current depth do not exist in the
//!    API.
//! 3. **Fail-Fast**: Constructors validate inputs eagerly so the search
//!    engine never observes an inconsistent solution.

pub mod board;
pub mod index;
pub mod placement;
pub mod solution;
