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

//! Boundary kinds for range endpoints.

use std::cmp::Ordering;

/// Whether an endpoint includes (`Closed`) or excludes (`Open`) its value.
///
/// The boundary tests take the ordering of a candidate relative to the
/// boundary value, `candidate.partial_cmp(&boundary)`, expressed as if the
/// range ran from smaller to larger values. A left boundary is satisfied by
/// candidates at or above it (`Closed`) or strictly above it (`Open`); a right
/// boundary by candidates at or below it (`Closed`) or strictly below it (`Open`).
///
/// # Examples
///
/// ```rust
/// # use functor_range::bound::BoundType;
/// use std::cmp::Ordering;
///
/// assert!(BoundType::Closed.is_left_compatible(Ordering::Equal));
/// assert!(!BoundType::Open.is_left_compatible(Ordering::Equal));
/// assert!(BoundType::Open.is_right_compatible(Ordering::Less));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoundType {
    /// The endpoint value belongs to the range.
    #[default]
    Closed,
    /// The endpoint value does not belong to the range.
    Open,
}

impl BoundType {
    /// Returns `Closed` for `true` and `Open` for `false`.
    #[inline]
    pub const fn from_inclusive(inclusive: bool) -> Self {
        if inclusive {
            Self::Closed
        } else {
            Self::Open
        }
    }

    /// Returns `true` for `Closed`.
    #[inline]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Tests a candidate against a left boundary of this kind.
    #[inline]
    pub fn is_left_compatible(self, ordering: Ordering) -> bool {
        match self {
            Self::Closed => ordering != Ordering::Less,
            Self::Open => ordering == Ordering::Greater,
        }
    }

    /// Tests a candidate against a right boundary of this kind.
    #[inline]
    pub fn is_right_compatible(self, ordering: Ordering) -> bool {
        match self {
            Self::Closed => ordering != Ordering::Greater,
            Self::Open => ordering == Ordering::Less,
        }
    }

    /// The delimiter printed before a left endpoint: `[` or `(`.
    #[inline]
    pub const fn left_delimiter(self) -> char {
        match self {
            Self::Closed => '[',
            Self::Open => '(',
        }
    }

    /// The delimiter printed after a right endpoint: `]` or `)`.
    #[inline]
    pub const fn right_delimiter(self) -> char {
        match self {
            Self::Closed => ']',
            Self::Open => ')',
        }
    }
}

impl std::fmt::Display for BoundType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "CLOSED"),
            Self::Open => write!(f, "OPEN"),
        }
    }
}

impl From<bool> for BoundType {
    #[inline]
    fn from(inclusive: bool) -> Self {
        Self::from_inclusive(inclusive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_accepts_equality_on_both_sides() {
        assert!(BoundType::Closed.is_left_compatible(Ordering::Equal));
        assert!(BoundType::Closed.is_right_compatible(Ordering::Equal));
    }

    #[test]
    fn test_open_rejects_equality_on_both_sides() {
        assert!(!BoundType::Open.is_left_compatible(Ordering::Equal));
        assert!(!BoundType::Open.is_right_compatible(Ordering::Equal));
    }

    #[test]
    fn test_left_side() {
        assert!(BoundType::Closed.is_left_compatible(Ordering::Greater));
        assert!(!BoundType::Closed.is_left_compatible(Ordering::Less));
        assert!(BoundType::Open.is_left_compatible(Ordering::Greater));
        assert!(!BoundType::Open.is_left_compatible(Ordering::Less));
    }

    #[test]
    fn test_right_side() {
        assert!(BoundType::Closed.is_right_compatible(Ordering::Less));
        assert!(!BoundType::Closed.is_right_compatible(Ordering::Greater));
        assert!(BoundType::Open.is_right_compatible(Ordering::Less));
        assert!(!BoundType::Open.is_right_compatible(Ordering::Greater));
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(BoundType::Closed.left_delimiter(), '[');
        assert_eq!(BoundType::Open.left_delimiter(), '(');
        assert_eq!(BoundType::Closed.right_delimiter(), ']');
        assert_eq!(BoundType::Open.right_delimiter(), ')');
    }

    #[test]
    fn test_from_inclusive() {
        assert_eq!(BoundType::from(true), BoundType::Closed);
        assert_eq!(BoundType::from_inclusive(false), BoundType::Open);
        assert!(BoundType::default().is_closed());
    }

    #[test]
    fn test_display() {
        assert_eq!(BoundType::Closed.to_string(), "CLOSED");
        assert_eq!(format!("{}", BoundType::Open), "OPEN");
    }
}
