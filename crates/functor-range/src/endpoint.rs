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

//! Range endpoints: a boundary value paired with its `BoundType`.

use crate::{
    bound::BoundType,
    element::{DisplayLiteral, Literal},
};

/// An immutable boundary value together with whether it is included.
///
/// Equality and hashing consider both the value and the bound type.
///
/// # Examples
///
/// ```rust
/// # use functor_range::{bound::BoundType, endpoint::Endpoint};
///
/// let left = Endpoint::new(-2, BoundType::Open);
/// assert_eq!(left.value(), -2);
/// assert_eq!(left.bound_type(), BoundType::Open);
/// assert_eq!(left, Endpoint::open(-2));
/// assert_ne!(left, Endpoint::closed(-2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint<T> {
    value: T,
    bound_type: BoundType,
}

impl<T> Endpoint<T> {
    /// Creates an endpoint with an explicit bound type.
    #[inline]
    pub const fn new(value: T, bound_type: BoundType) -> Self {
        Self { value, bound_type }
    }

    /// Creates an inclusive endpoint.
    #[inline]
    pub const fn closed(value: T) -> Self {
        Self::new(value, BoundType::Closed)
    }

    /// Creates an exclusive endpoint.
    #[inline]
    pub const fn open(value: T) -> Self {
        Self::new(value, BoundType::Open)
    }

    /// Returns the bound type.
    #[inline]
    pub const fn bound_type(&self) -> BoundType {
        self.bound_type
    }

    /// Returns `true` if the endpoint includes its value.
    #[inline]
    pub const fn is_closed(&self) -> bool {
        self.bound_type.is_closed()
    }
}

impl<T> Endpoint<T>
where
    T: Copy,
{
    /// Returns the boundary value.
    #[inline]
    pub const fn value(&self) -> T {
        self.value
    }
}

impl<T> std::fmt::Display for Endpoint<T>
where
    T: Literal,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Endpoint<{}, {}>",
            DisplayLiteral(&self.value),
            self.bound_type
        )
    }
}
