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

//! Errors reported while building a `Range`.

use crate::element::{DisplayLiteral, RangeElement};

/// The reason a range could not be constructed.
///
/// Every variant is detected at construction time; a range that was built
/// successfully never fails later.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeError<T>
where
    T: RangeElement,
{
    /// A boundary value or the step is unordered against itself (NaN).
    Incomparable {
        /// Which input was rejected: `"left"`, `"right"` or `"step"`.
        what: &'static str,
    },
    /// The step is zero but the endpoints differ, so the walk cannot move.
    ZeroStep {
        /// The left boundary value.
        left: T,
        /// The right boundary value.
        right: T,
    },
    /// The step points away from the right endpoint.
    Unreachable {
        /// The left boundary value.
        left: T,
        /// The right boundary value.
        right: T,
        /// The rejected step.
        step: T::Step,
    },
}

impl<T> std::fmt::Display for RangeError<T>
where
    T: RangeElement,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Incomparable { what } => {
                write!(f, "The {} value of a range must not be NaN", what)
            }
            Self::ZeroStep { left, right } => write!(
                f,
                "A zero step will never reach {} from {}",
                DisplayLiteral(right),
                DisplayLiteral(left)
            ),
            Self::Unreachable { left, right, step } => write!(
                f,
                "Will never reach {} from {} using step {}",
                DisplayLiteral(right),
                DisplayLiteral(left),
                DisplayLiteral(step)
            ),
        }
    }
}

impl<T> std::error::Error for RangeError<T> where T: RangeElement {}
