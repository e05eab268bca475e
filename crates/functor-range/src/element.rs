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

//! # Range Element Policy
//!
//! `RangeElement` is the single seam `Range<T>` is generic over. It bundles
//! the numeric capabilities from `functor_core::num` with the pieces a range
//! needs on top: a type label for `Display`, the step type, a default step,
//! and a comparability check standing in for the absent-value case.
//!
//! | Element | Step  | Label            |
//! |---------|-------|------------------|
//! | `i32`   | `i32` | `IntegerRange`   |
//! | `i64`   | `i64` | `LongRange`      |
//! | `f32`   | `f32` | `FloatRange`     |
//! | `f64`   | `f64` | `DoubleRange`    |
//! | `char`  | `i32` | `CharacterRange` |

use functor_core::num::{constants::StepUnit, offset::Offset, stride::Stride};
use std::fmt;

/// Formats a value the way ranges print their endpoints and steps.
///
/// Floating point values always carry a fractional part (`-2.0`, not `-2`),
/// characters print without quotes.
pub trait Literal {
    /// Writes the literal form of `self`.
    fn fmt_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Adapter that renders any `Literal` through `Display`.
///
/// # Examples
///
/// ```rust
/// # use functor_range::element::DisplayLiteral;
/// assert_eq!(DisplayLiteral(&2.0f32).to_string(), "2.0");
/// assert_eq!(DisplayLiteral(&'x').to_string(), "x");
/// assert_eq!(DisplayLiteral(&-7i64).to_string(), "-7");
/// ```
#[derive(Clone, Copy)]
pub struct DisplayLiteral<'a, T>(pub &'a T);

impl<T> fmt::Display for DisplayLiteral<'_, T>
where
    T: Literal,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_literal(f)
    }
}

macro_rules! literal_impl {
    ($t:ty, $fmt:literal) => {
        impl Literal for $t {
            #[inline]
            fn fmt_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, $fmt, self)
            }
        }
    };
}

literal_impl!(i32, "{}");
literal_impl!(i64, "{}");
literal_impl!(f32, "{:?}");
literal_impl!(f64, "{:?}");
literal_impl!(char, "{}");

/// A type that can be enumerated by a `Range`.
pub trait RangeElement: Copy + PartialOrd + fmt::Debug + Literal {
    /// The signed increment applied on every step.
    type Step: StepUnit + Literal + fmt::Debug;

    /// The label used when printing a range of this element type.
    const NAME: &'static str;

    /// Returns `self + step`, or `None` once the walk leaves the domain.
    fn advance(self, step: Self::Step) -> Option<Self>;

    /// Returns `true` if `value` is `origin + k * step` for some `k >= 0`.
    fn reaches(origin: Self, value: Self, step: Self::Step) -> bool;

    /// The unit step from `left` towards `right`, descending when they are equal.
    #[inline]
    fn default_step(left: Self, right: Self) -> Self::Step {
        <Self::Step as StepUnit>::towards(left, right)
    }

    /// Returns `false` for values that are unordered even against themselves (NaN).
    #[inline]
    fn is_comparable(self) -> bool {
        self.partial_cmp(&self).is_some()
    }
}

macro_rules! range_element_impl {
    ($t:ty, $step:ty, $name:literal) => {
        impl RangeElement for $t {
            type Step = $step;

            const NAME: &'static str = $name;

            #[inline]
            fn advance(self, step: $step) -> Option<Self> {
                Offset::offset(self, step)
            }

            #[inline]
            fn reaches(origin: Self, value: Self, step: $step) -> bool {
                <$t as Stride>::lands_on(origin, value, step)
            }
        }
    };
}

range_element_impl!(i32, i32, "IntegerRange");
range_element_impl!(i64, i64, "LongRange");
range_element_impl!(f32, f32, "FloatRange");
range_element_impl!(f64, f64, "DoubleRange");
range_element_impl!(char, i32, "CharacterRange");
