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

//! # Stepping by Value
//!
//! `Offset` advances a value by a step and reports, rather than hides, a
//! result that leaves the type's domain. Integer types use checked addition so
//! a walk that reaches `MAX` ends instead of wrapping to `MIN`. Floating types
//! add directly; infinities and rounding are the caller's concern. `char`
//! steps over Unicode scalar values and skips the surrogate block.

/// A type that can be advanced by a step of type `Self::Step`.
///
/// # Examples
///
/// ```rust
/// # use functor_core::num::offset::Offset;
/// assert_eq!(5i32.offset(3), Some(8));
/// assert_eq!(i64::MAX.offset(1), None);
/// assert_eq!('b'.offset(3), Some('e'));
/// assert_eq!(1.5f64.offset(-0.5), Some(1.0));
/// ```
pub trait Offset: Sized + Copy {
    /// The type of the step added on every move.
    type Step: Copy;

    /// Returns `self + step`, or `None` if the result is not representable.
    fn offset(self, step: Self::Step) -> Option<Self>;
}

macro_rules! checked_offset_impl {
    ($t:ty) => {
        impl Offset for $t {
            type Step = $t;

            #[inline(always)]
            fn offset(self, step: $t) -> Option<$t> {
                <$t>::checked_add(self, step)
            }
        }
    };
}

macro_rules! float_offset_impl {
    ($t:ty) => {
        impl Offset for $t {
            type Step = $t;

            #[inline(always)]
            fn offset(self, step: $t) -> Option<$t> {
                Some(self + step)
            }
        }
    };
}

checked_offset_impl!(i32);
checked_offset_impl!(i64);

float_offset_impl!(f32);
float_offset_impl!(f64);

const SURROGATES: std::ops::RangeInclusive<i64> = 0xD800..=0xDFFF;

impl Offset for char {
    type Step = i32;

    fn offset(self, step: i32) -> Option<char> {
        if step == 0 {
            return Some(self);
        }
        let mut code = i64::from(u32::from(self));
        loop {
            code += i64::from(step);
            if code < 0 || code > i64::from(u32::from(char::MAX)) {
                return None;
            }
            if !SURROGATES.contains(&code) {
                return char::from_u32(code as u32);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_offset() {
        assert_eq!((-5i32).offset(3), Some(-2));
        assert_eq!(10i64.offset(-4), Some(6));
        assert_eq!(0i32.offset(0), Some(0));
    }

    #[test]
    fn test_integer_offset_overflow() {
        assert_eq!(i32::MAX.offset(1), None);
        assert_eq!(i32::MIN.offset(-1), None);
        assert_eq!((i64::MAX - 1).offset(1), Some(i64::MAX));
        assert_eq!(i64::MAX.offset(1), None);
    }

    #[test]
    fn test_float_offset() {
        assert_eq!((-2.0f32).offset(1.0), Some(-1.0));
        assert_eq!(0.5f64.offset(0.25), Some(0.75));
        assert_eq!(f64::INFINITY.offset(1.0), Some(f64::INFINITY));
    }

    #[test]
    fn test_char_offset() {
        assert_eq!('a'.offset(1), Some('b'));
        assert_eq!('l'.offset(-3), Some('i'));
        assert_eq!('x'.offset(0), Some('x'));
    }

    #[test]
    fn test_char_offset_out_of_domain() {
        assert_eq!('\0'.offset(-1), None);
        assert_eq!(char::MAX.offset(1), None);
    }

    #[test]
    fn test_char_offset_skips_surrogates() {
        assert_eq!('\u{D7FF}'.offset(1), Some('\u{E000}'));
        assert_eq!('\u{E000}'.offset(-1), Some('\u{D7FF}'));
        // Skipping keeps the step phase: 0xD7FE + 3k first leaves the block at 0xE002.
        assert_eq!('\u{D7FE}'.offset(3), Some('\u{E002}'));
    }
}
