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

//! # Range Builder
//!
//! `RangeBuilder` is the options struct behind every construction entry
//! point. It holds the five inputs of a range explicitly (left value, left
//! bound, right value, right bound, step) so that callers name what they
//! override instead of picking among positional overloads. Validation happens
//! once, in `build`.

use crate::{
    bound::BoundType,
    element::RangeElement,
    endpoint::Endpoint,
    error::RangeError,
    range::Range,
};

/// Collects the inputs of a `Range` and validates them on `build`.
///
/// Defaults: closed left endpoint, open right endpoint, and the unit step
/// pointing from the left value towards the right value.
///
/// # Examples
///
/// ```rust
/// # use functor_range::{bound::BoundType, builder::RangeBuilder};
///
/// let range = RangeBuilder::new(-5, 5)
///     .left_bound(BoundType::Open)
///     .right_bound(BoundType::Closed)
///     .step(3)
///     .build()?;
/// assert_eq!(range.iter().collect::<Vec<_>>(), vec![-2, 1, 4]);
/// # Ok::<(), functor_range::error::RangeError<i32>>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeBuilder<T>
where
    T: RangeElement,
{
    left: T,
    left_bound: BoundType,
    right: T,
    right_bound: BoundType,
    step: Option<T::Step>,
}

impl<T> RangeBuilder<T>
where
    T: RangeElement,
{
    /// Creates a builder for a range from `left` to `right` with default bounds and step.
    #[inline]
    pub fn new(left: T, right: T) -> Self {
        Self {
            left,
            left_bound: BoundType::Closed,
            right,
            right_bound: BoundType::Open,
            step: None,
        }
    }

    /// Creates a builder from two endpoints, keeping their bound types.
    #[inline]
    pub fn between(left: Endpoint<T>, right: Endpoint<T>) -> Self {
        Self::new(left.value(), right.value())
            .left_bound(left.bound_type())
            .right_bound(right.bound_type())
    }

    /// Sets the bound type of the left endpoint.
    #[inline]
    pub fn left_bound(mut self, bound: BoundType) -> Self {
        self.left_bound = bound;
        self
    }

    /// Sets the bound type of the right endpoint.
    #[inline]
    pub fn right_bound(mut self, bound: BoundType) -> Self {
        self.right_bound = bound;
        self
    }

    /// Makes both endpoints inclusive.
    #[inline]
    pub fn closed(self) -> Self {
        self.left_bound(BoundType::Closed).right_bound(BoundType::Closed)
    }

    /// Makes both endpoints exclusive.
    #[inline]
    pub fn open(self) -> Self {
        self.left_bound(BoundType::Open).right_bound(BoundType::Open)
    }

    /// Sets an explicit step, replacing the default unit step.
    #[inline]
    pub fn step(mut self, step: T::Step) -> Self {
        self.step = Some(step);
        self
    }

    /// The step `build` will use: the explicit one, or the default unit step.
    #[inline]
    pub fn effective_step(&self) -> T::Step {
        self.step.unwrap_or_else(|| T::default_step(self.left, self.right))
    }

    /// Validates the inputs and creates the range.
    ///
    /// # Errors
    ///
    /// See `Range::new`.
    pub fn build(self) -> Result<Range<T>, RangeError<T>> {
        Range::new(
            Endpoint::new(self.left, self.left_bound),
            Endpoint::new(self.right, self.right_bound),
            self.effective_step(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let b = RangeBuilder::new(0, 3);
        assert_eq!(b.effective_step(), 1);
        let r = b.build().unwrap();
        assert_eq!(r.left_endpoint(), Endpoint::closed(0));
        assert_eq!(r.right_endpoint(), Endpoint::open(3));
        assert_eq!(r.step(), 1);
    }

    #[test]
    fn test_default_step_descends() {
        let b = RangeBuilder::new(3.0f32, -3.0);
        assert_eq!(b.effective_step(), -1.0);
        assert_eq!(RangeBuilder::new('d', 'a').effective_step(), -1);
    }

    #[test]
    fn test_overrides() {
        let r = RangeBuilder::new(10i64, 0).open().step(-5).build().unwrap();
        assert_eq!(r.left_endpoint(), Endpoint::open(10));
        assert_eq!(r.right_endpoint(), Endpoint::open(0));
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![5]);

        let r = RangeBuilder::new(1, 3).closed().build().unwrap();
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_between_keeps_bound_types() {
        let b = RangeBuilder::between(Endpoint::open('a'), Endpoint::closed('c'));
        let r = b.build().unwrap();
        assert_eq!(r.iter().collect::<Vec<_>>(), vec!['b', 'c']);
    }

    #[test]
    fn test_build_reports_errors() {
        assert!(RangeBuilder::new(0, 3).step(-1).build().is_err());
        assert!(RangeBuilder::new(0.0, f64::NAN).build().is_err());
    }
}
