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

//! # Column Numeric Trait
//!
//! Unified numeric bounds for the column storage type. `ColumnNumeric`
//! collects the integer capabilities the search engine requires into a
//! single alias, simplifying generic signatures.
//!
//! ## Highlights
//!
//! - Requires `PrimInt + Unsigned` for numeric fundamentals: column values
//!   are nonnegative, and diagonal distances are computed by ordered
//!   subtraction rather than `abs`.
//! - `FromPrimitive`/`ToPrimitive` bridge between `usize` board addressing
//!   and the stored column values.
//! - `Send + Sync` so monitors sharing counters across threads stay
//!   compatible.

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};
use std::hash::Hash;

/// A trait alias for integer types that can store a column value.
/// These are usually the unsigned integer types `u8`, `u16`, `u32`, `u64`
/// and `usize`; a small type keeps the placement prefix dense.
pub trait ColumnNumeric:
    PrimInt
    + Unsigned
    + FromPrimitive
    + ToPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + Hash
    + Send
    + Sync
{
}

impl<T> ColumnNumeric for T where
    T: PrimInt
        + Unsigned
        + FromPrimitive
        + ToPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + Hash
        + Send
        + Sync
{
}
