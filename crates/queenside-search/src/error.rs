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

/// Boundary validation failures of a solve request.
///
/// Inputs are checked before the search starts; no failure can arise
/// mid-search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The board dimension cannot be addressed by the chosen column type.
    BoardTooLarge {
        /// The requested board dimension.
        size: usize,
        /// The largest dimension the column type can address.
        limit: usize,
    },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::BoardTooLarge { size, limit } => write!(
                f,
                "board of size {} exceeds the column type's addressable range (limit {})",
                size, limit
            ),
        }
    }
}

impl std::error::Error for SolveError {}

#[cfg(test)]
mod tests {
    use super::SolveError;

    #[test]
    fn test_display_names_both_dimensions() {
        let error = SolveError::BoardTooLarge {
            size: 300,
            limit: 255,
        };
        let rendered = format!("{}", error);

        assert!(rendered.contains("300"), "missing requested size");
        assert!(rendered.contains("255"), "missing type limit");
    }
}
