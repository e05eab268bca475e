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

/// Step constants for types that can serve as the step of a progression.
///
/// # Examples
///
/// ```rust
/// # use functor_core::num::constants::StepUnit;
/// assert_eq!(<i64 as StepUnit>::ASCENDING, 1);
/// assert_eq!(<f32 as StepUnit>::DESCENDING, -1.0);
/// assert_eq!(<i32 as StepUnit>::ZERO, 0);
/// ```
pub trait StepUnit: Copy + PartialOrd {
    /// The step that does not move.
    const ZERO: Self;
    /// The unit step towards larger values.
    const ASCENDING: Self;
    /// The unit step towards smaller values.
    const DESCENDING: Self;

    /// Returns the unit step that moves from `from` towards `to`.
    ///
    /// Equal (or unordered) values yield the descending unit.
    #[inline]
    fn towards<T>(from: T, to: T) -> Self
    where
        T: PartialOrd,
    {
        if from < to {
            Self::ASCENDING
        } else {
            Self::DESCENDING
        }
    }

    /// Returns `true` if the step is exactly zero.
    #[inline]
    fn is_zero_step(self) -> bool {
        self == Self::ZERO
    }

    /// Returns `true` if the step moves towards larger values.
    #[inline]
    fn is_ascending(self) -> bool {
        self > Self::ZERO
    }
}

macro_rules! impl_step_unit_for {
    ($t:ty, $zero:expr, $one:expr) => {
        impl StepUnit for $t {
            const ZERO: Self = $zero;
            const ASCENDING: Self = $one;
            const DESCENDING: Self = -$one;
        }
    };
}

impl_step_unit_for!(i32, 0, 1);
impl_step_unit_for!(i64, 0, 1);
impl_step_unit_for!(f32, 0.0, 1.0);
impl_step_unit_for!(f64, 0.0, 1.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(<i32 as StepUnit>::ASCENDING, 1);
        assert_eq!(<i32 as StepUnit>::DESCENDING, -1);
        assert_eq!(<f64 as StepUnit>::ZERO, 0.0);
        assert_eq!(<f64 as StepUnit>::DESCENDING, -1.0);
    }

    #[test]
    fn test_towards() {
        assert_eq!(i32::towards(1, 5), 1);
        assert_eq!(i32::towards(5, 1), -1);
        assert_eq!(i64::towards('a', 'z'), 1);
        // Equal endpoints fall back to descending.
        assert_eq!(f32::towards(2.0, 2.0), -1.0);
        assert_eq!(f64::towards(f64::NAN, 1.0), -1.0);
    }

    #[test]
    fn test_direction_predicates() {
        assert!(0i32.is_zero_step());
        assert!(!(-0.5f64).is_zero_step());
        assert!(3i64.is_ascending());
        assert!(!(-3i64).is_ascending());
        assert!(!0.0f32.is_ascending());
    }
}
