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

//! # Stepped Ranges
//!
//! `Range<T>` is an arithmetic progression between two endpoints. It is
//! immutable once built and hands out a fresh, independent iterator on every
//! call to `iter`, so the same range can be traversed any number of times,
//! from any number of threads.
//!
//! ## Walk
//!
//! The first candidate is the left value when the left endpoint is closed,
//! or `left + step` when it is open. Each candidate is tested against the
//! right endpoint only; the walk ends at the first candidate that fails that
//! test, that cannot be represented, or (for floats) that the step no longer
//! moves. Direction comes from the sign of the step, which construction has
//! already checked against the endpoint ordering.
//!
//! A degenerate range, whose endpoints share a value, yields that value once
//! if both endpoints are closed and nothing otherwise, whatever the step.
//!
//! ## Membership
//!
//! `contains` is progression membership, not interval membership: the value
//! must satisfy both boundary tests and be reached from the left value by a
//! whole number of steps. It always agrees with what `iter` yields.

use crate::{
    bound::BoundType,
    builder::RangeBuilder,
    element::{DisplayLiteral, RangeElement},
    endpoint::Endpoint,
    error::RangeError,
};
use functor_core::num::constants::StepUnit;
use std::{cmp::Ordering, iter::FusedIterator};

/// A range of `i32` values.
pub type IntegerRange = Range<i32>;
/// A range of `i64` values.
pub type LongRange = Range<i64>;
/// A range of `f32` values.
pub type FloatRange = Range<f32>;
/// A range of `f64` values.
pub type DoubleRange = Range<f64>;
/// A range of `char` values, stepped by `i32` code point offsets.
pub type CharacterRange = Range<char>;

/// An arithmetic progression between a left and a right `Endpoint`.
///
/// # Invariants
///
/// - Neither endpoint value nor the step is NaN.
/// - If the endpoint values differ, the step is nonzero and ascending exactly
///   when `left < right`.
///
/// Two ranges are equal iff their endpoints and steps are equal.
///
/// # Examples
///
/// ```rust
/// # use functor_range::{endpoint::Endpoint, range::Range};
///
/// let range = Range::new(Endpoint::open(-5), Endpoint::closed(5), 3)?;
/// assert_eq!(range.iter().collect::<Vec<_>>(), vec![-2, 1, 4]);
/// assert_eq!(range.to_string(), "IntegerRange<(-5, 5], 3>");
/// # Ok::<(), functor_range::error::RangeError<i32>>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range<T>
where
    T: RangeElement,
{
    left: Endpoint<T>,
    right: Endpoint<T>,
    step: T::Step,
}

/// An iterator over the values of a `Range`.
///
/// Created by `Range::iter`. Each iterator owns its cursor; iterators from the
/// same range never observe each other.
#[derive(Clone, Debug)]
pub struct RangeIter<T>
where
    T: RangeElement,
{
    next: Option<T>,
    right: Endpoint<T>,
    step: T::Step,
    descending: bool,
    single: bool,
}

impl<T> RangeIter<T>
where
    T: RangeElement,
{
    #[inline]
    fn within_right(&self, value: T) -> bool {
        match value.partial_cmp(&self.right.value()) {
            Some(ordering) => self
                .right
                .bound_type()
                .is_right_compatible(orient(ordering, self.descending)),
            None => false,
        }
    }
}

impl<T> Iterator for RangeIter<T>
where
    T: RangeElement,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self.single {
            self.next = current
                .advance(self.step)
                .filter(|candidate| *candidate != current && self.within_right(*candidate));
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.next, self.single) {
            (None, _) => (0, Some(0)),
            (Some(_), true) => (1, Some(1)),
            (Some(_), false) => (1, None),
        }
    }
}

impl<T> FusedIterator for RangeIter<T> where T: RangeElement {}

/// Flips an ordering for descending walks so boundary tests can always be
/// phrased as if the range ran from smaller to larger values.
#[inline]
fn orient(ordering: Ordering, descending: bool) -> Ordering {
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}

impl<T> Range<T>
where
    T: RangeElement,
{
    /// Creates a range from two endpoints and a step.
    ///
    /// # Errors
    ///
    /// - `RangeError::Incomparable` if an endpoint value or the step is NaN.
    /// - `RangeError::ZeroStep` if the values differ and the step is zero.
    /// - `RangeError::Unreachable` if the step points away from the right value.
    ///
    /// When both values are equal any step is accepted, zero included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use functor_range::{endpoint::Endpoint, error::RangeError, range::Range};
    ///
    /// assert!(Range::new(Endpoint::closed(0.0f64), Endpoint::open(1.0), 0.25).is_ok());
    /// assert!(matches!(
    ///     Range::new(Endpoint::closed(-5.0f64), Endpoint::open(5.0), -3.0),
    ///     Err(RangeError::Unreachable { .. })
    /// ));
    /// assert!(Range::new(Endpoint::closed(4i32), Endpoint::closed(4), 0).is_ok());
    /// ```
    pub fn new(
        left: Endpoint<T>,
        right: Endpoint<T>,
        step: T::Step,
    ) -> Result<Self, RangeError<T>> {
        let (left_value, right_value) = (left.value(), right.value());
        if !left_value.is_comparable() {
            return Err(RangeError::Incomparable { what: "left" });
        }
        if !right_value.is_comparable() {
            return Err(RangeError::Incomparable { what: "right" });
        }
        if step.partial_cmp(&step).is_none() {
            return Err(RangeError::Incomparable { what: "step" });
        }

        if left_value != right_value {
            if step.is_zero_step() {
                return Err(RangeError::ZeroStep {
                    left: left_value,
                    right: right_value,
                });
            }
            if (left_value < right_value) != step.is_ascending() {
                return Err(RangeError::Unreachable {
                    left: left_value,
                    right: right_value,
                    step,
                });
            }
        }

        Ok(Self { left, right, step })
    }

    /// Starts a `RangeBuilder` with a closed left endpoint, an open right
    /// endpoint and the default unit step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use functor_range::range::Range;
    ///
    /// let range = Range::builder(1i64, 4).build()?;
    /// assert_eq!(range.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// # Ok::<(), functor_range::error::RangeError<i64>>(())
    /// ```
    #[inline]
    pub fn builder(left: T, right: T) -> RangeBuilder<T> {
        RangeBuilder::new(left, right)
    }

    /// Returns the left endpoint.
    #[inline]
    pub fn left_endpoint(&self) -> Endpoint<T> {
        self.left
    }

    /// Returns the right endpoint.
    #[inline]
    pub fn right_endpoint(&self) -> Endpoint<T> {
        self.right
    }

    /// Returns the step.
    #[inline]
    pub fn step(&self) -> T::Step {
        self.step
    }

    /// Returns `true` if both endpoints share the same value.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.left.value() == self.right.value()
    }

    #[inline]
    fn is_descending(&self) -> bool {
        !self.is_degenerate() && !self.step.is_ascending()
    }

    /// Returns `true` if `value` passes both boundary tests.
    fn admits(&self, value: T) -> bool {
        let descending = self.is_descending();
        let (Some(from_left), Some(from_right)) = (
            value.partial_cmp(&self.left.value()),
            value.partial_cmp(&self.right.value()),
        ) else {
            return false;
        };
        self.left
            .bound_type()
            .is_left_compatible(orient(from_left, descending))
            && self
                .right
                .bound_type()
                .is_right_compatible(orient(from_right, descending))
    }

    /// Returns `true` if the walk yields `value`.
    ///
    /// NaN is never contained. Integral and character ranges answer in
    /// constant time. Floating ranges replay the walk up to `value`, so the
    /// cost is linear in the number of steps between the left value and
    /// `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use functor_range::ranges;
    ///
    /// let range = ranges::character_range('b', 'l').closed().step(3).build()?;
    /// assert!(range.contains('e'));
    /// assert!(!range.contains('d'));
    /// # Ok::<(), functor_range::error::RangeError<char>>(())
    /// ```
    pub fn contains(&self, value: T) -> bool {
        self.admits(value) && T::reaches(self.left.value(), value, self.step)
    }

    /// Returns `true` if every value is contained and there is at least one.
    ///
    /// An empty input yields `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use functor_range::ranges;
    ///
    /// let range = ranges::range_with_step(0, 10, 2)?;
    /// assert!(range.contains_all([0, 4, 8]));
    /// assert!(!range.contains_all([0, 3]));
    /// assert!(!range.contains_all(Vec::<i32>::new()));
    /// # Ok::<(), functor_range::error::RangeError<i32>>(())
    /// ```
    pub fn contains_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut seen = false;
        for value in values {
            if !self.contains(value) {
                return false;
            }
            seen = true;
        }
        seen
    }

    /// Returns `true` if the walk yields no values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use functor_range::{bound::BoundType, ranges};
    ///
    /// assert!(ranges::range(3, 3)?.is_empty());
    /// let single = ranges::range_with_bounds(3, BoundType::Closed, 3, BoundType::Closed, 1)?;
    /// assert!(!single.is_empty());
    /// # Ok::<(), functor_range::error::RangeError<i32>>(())
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Returns a new iterator over the values of the range.
    pub fn iter(&self) -> RangeIter<T> {
        let left = self.left.value();
        let single = self.is_degenerate();
        let first = if single {
            (self.left.is_closed() && self.right.is_closed()).then_some(left)
        } else {
            match self.left.bound_type() {
                BoundType::Closed => Some(left),
                BoundType::Open => left.advance(self.step),
            }
        };

        let mut iter = RangeIter {
            next: None,
            right: self.right,
            step: self.step,
            descending: self.is_descending(),
            single,
        };
        iter.next = first.filter(|value| iter.within_right(*value));
        iter
    }
}

impl<T> std::fmt::Display for Range<T>
where
    T: RangeElement,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}<{}{}, {}{}, {}>",
            T::NAME,
            self.left.bound_type().left_delimiter(),
            DisplayLiteral(&self.left.value()),
            DisplayLiteral(&self.right.value()),
            self.right.bound_type().right_delimiter(),
            DisplayLiteral(&self.step)
        )
    }
}

impl<T> IntoIterator for Range<T>
where
    T: RangeElement,
{
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &Range<T>
where
    T: RangeElement,
{
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> TryFrom<std::ops::Range<T>> for Range<T>
where
    T: RangeElement,
{
    type Error = RangeError<T>;

    /// Converts `start..end` into a closed-open range with the default step.
    #[inline]
    fn try_from(range: std::ops::Range<T>) -> Result<Self, Self::Error> {
        RangeBuilder::new(range.start, range.end).build()
    }
}

impl<T> TryFrom<std::ops::RangeInclusive<T>> for Range<T>
where
    T: RangeElement,
{
    type Error = RangeError<T>;

    /// Converts `start..=end` into a closed-closed range with the default step.
    #[inline]
    fn try_from(range: std::ops::RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        RangeBuilder::new(start, end).closed().build()
    }
}
