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

//! # Range Construction
//!
//! Entry points for building ranges. The generic functions cover the four
//! classic shapes (raw values, raw values with a step, two endpoints with a
//! step, raw values with explicit bound types and a step) for every
//! `RangeElement`. The per-type functions return a `RangeBuilder` for callers
//! who prefer naming the element type up front.
//!
//! Raw values default to a closed left and an open right endpoint. A missing
//! step defaults to `+1` when `left < right` and `-1` otherwise.
//!
//! # Examples
//!
//! ```rust
//! use functor_range::{bound::BoundType, endpoint::Endpoint, ranges};
//!
//! let a = ranges::range_between(Endpoint::open(-2i32), Endpoint::closed(2), 1)?;
//! let b = ranges::range_with_bounds(-2i32, BoundType::Open, 2, BoundType::Closed, 1)?;
//! assert_eq!(a, b);
//!
//! let c = ranges::long_range(i64::MAX - 3, i64::MAX).build()?;
//! assert_eq!(c.iter().count(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    bound::BoundType,
    builder::RangeBuilder,
    element::RangeElement,
    endpoint::Endpoint,
    error::RangeError,
    range::Range,
};

/// Builds `[left, right)` with the default step.
#[inline]
pub fn range<T>(left: T, right: T) -> Result<Range<T>, RangeError<T>>
where
    T: RangeElement,
{
    RangeBuilder::new(left, right).build()
}

/// Builds `[left, right)` with an explicit step.
#[inline]
pub fn range_with_step<T>(left: T, right: T, step: T::Step) -> Result<Range<T>, RangeError<T>>
where
    T: RangeElement,
{
    RangeBuilder::new(left, right).step(step).build()
}

/// Builds a range from two endpoints and a step.
#[inline]
pub fn range_between<T>(
    left: Endpoint<T>,
    right: Endpoint<T>,
    step: T::Step,
) -> Result<Range<T>, RangeError<T>>
where
    T: RangeElement,
{
    Range::new(left, right, step)
}

/// Builds a range from raw values with explicit bound types and a step.
#[inline]
pub fn range_with_bounds<T>(
    left: T,
    left_bound: BoundType,
    right: T,
    right_bound: BoundType,
    step: T::Step,
) -> Result<Range<T>, RangeError<T>>
where
    T: RangeElement,
{
    Range::new(
        Endpoint::new(left, left_bound),
        Endpoint::new(right, right_bound),
        step,
    )
}

macro_rules! typed_entry_point {
    ($name:ident, $t:ty, $alias:ident) => {
        #[doc = concat!(
            "Starts a builder for an `",
            stringify!($alias),
            "` from `left` to `right`."
        )]
        #[inline]
        pub fn $name(left: $t, right: $t) -> RangeBuilder<$t> {
            RangeBuilder::new(left, right)
        }
    };
}

typed_entry_point!(integer_range, i32, IntegerRange);
typed_entry_point!(long_range, i64, LongRange);
typed_entry_point!(float_range, f32, FloatRange);
typed_entry_point!(double_range, f64, DoubleRange);
typed_entry_point!(character_range, char, CharacterRange);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::BoundType::{Closed, Open};

    #[test]
    fn test_range_defaults() {
        let r = range(-2, 2).unwrap();
        assert_eq!(r.to_string(), "IntegerRange<[-2, 2), 1>");
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![-2, -1, 0, 1]);
    }

    #[test]
    fn test_range_with_step() {
        let r = range_with_step(0.0f32, 2.0, 0.5).unwrap();
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![0.0, 0.5, 1.0, 1.5]);
        assert!(range_with_step(0.0f32, 2.0, -0.5).is_err());
    }

    #[test]
    fn test_range_between_matches_with_bounds() {
        let a = range_between(Endpoint::closed('a'), Endpoint::open('e'), 2).unwrap();
        let b = range_with_bounds('a', Closed, 'e', Open, 2).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.iter().collect::<String>(), "ac");
    }

    #[test]
    fn test_typed_entry_points() {
        let r = integer_range(-5, 5).closed().step(3).build().unwrap();
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![-5, -2, 1, 4]);

        let r = long_range(i64::MAX - 3, i64::MAX).build().unwrap();
        assert_eq!(
            r.iter().collect::<Vec<_>>(),
            vec![i64::MAX - 3, i64::MAX - 2, i64::MAX - 1]
        );

        let r = float_range(-2.0, 2.0)
            .left_bound(Open)
            .right_bound(Closed)
            .step(1.0)
            .build()
            .unwrap();
        assert_eq!(r.to_string(), "FloatRange<(-2.0, 2.0], 1.0>");

        assert!(double_range(-5.0, 5.0).step(-3.0).build().is_err());

        let r = character_range('b', 'l')
            .left_bound(Open)
            .right_bound(Closed)
            .step(3)
            .build()
            .unwrap();
        assert_eq!(r.iter().collect::<String>(), "ehk");
    }
}
