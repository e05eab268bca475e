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

//! # Progression Membership
//!
//! `Stride` answers whether a value lies on the progression
//! `origin, origin + step, origin + 2 * step, ...` in the direction of the step.
//!
//! Integral types (including `char`, measured in code points) decide this
//! with exact modular arithmetic on `i128`, which cannot overflow for the
//! supported widths. Floating types replay the repeated addition the range
//! iterator performs, so the answer agrees with iteration bit for bit,
//! accumulated rounding included. The replay is linear in the number of steps
//! between `origin` and `value`.

use crate::num::offset::Offset;
use num_traits::Float;

/// A type whose progressions support membership queries.
///
/// # Examples
///
/// ```rust
/// # use functor_core::num::stride::Stride;
/// assert!(i32::lands_on(-5, 4, 3));
/// assert!(!i32::lands_on(-5, 5, 3));
/// assert!(char::lands_on('b', 'e', 3));
/// assert!(!char::lands_on('b', 'd', 3));
/// assert!(f64::lands_on(0.0, 0.30000000000000004, 0.1));
/// assert!(!f64::lands_on(0.0, 0.3, 0.1));
/// ```
pub trait Stride: Offset {
    /// Returns `true` if `value` is `origin + k * step` for some `k >= 0`.
    fn lands_on(origin: Self, value: Self, step: Self::Step) -> bool;
}

#[inline]
fn lands_on_integral(distance: i128, step: i128) -> bool {
    if step == 0 {
        return distance == 0;
    }
    distance % step == 0 && (distance == 0 || (distance > 0) == (step > 0))
}

fn replay<F>(origin: F, value: F, step: F) -> bool
where
    F: Float,
{
    if origin.is_nan() || value.is_nan() || step.is_nan() {
        return false;
    }
    let ascending = step > F::zero();
    let mut current = origin;
    loop {
        if current == value {
            return true;
        }
        let passed = if ascending {
            current > value
        } else {
            current < value
        };
        if step == F::zero() || passed {
            return false;
        }
        let next = current + step;
        if next == current || next.is_nan() {
            return false;
        }
        current = next;
    }
}

macro_rules! integral_stride_impl {
    ($t:ty) => {
        impl Stride for $t {
            #[inline]
            fn lands_on(origin: $t, value: $t, step: $t) -> bool {
                lands_on_integral(i128::from(value) - i128::from(origin), i128::from(step))
            }
        }
    };
}

macro_rules! float_stride_impl {
    ($t:ty) => {
        impl Stride for $t {
            #[inline]
            fn lands_on(origin: $t, value: $t, step: $t) -> bool {
                replay(origin, value, step)
            }
        }
    };
}

integral_stride_impl!(i32);
integral_stride_impl!(i64);

float_stride_impl!(f32);
float_stride_impl!(f64);

impl Stride for char {
    #[inline]
    fn lands_on(origin: char, value: char, step: i32) -> bool {
        lands_on_integral(
            i128::from(u32::from(value)) - i128::from(u32::from(origin)),
            i128::from(step),
        )
    }
}
