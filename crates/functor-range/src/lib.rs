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

//! # Functor Range
//!
//! Lazily enumerable arithmetic progressions between two endpoints. A
//! `Range<T>` pairs a left and a right `Endpoint`, each either `CLOSED`
//! (inclusive) or `OPEN` (exclusive), with a signed step, and yields
//! `left, left + step, left + 2 * step, ...` until the right boundary is
//! passed.
//!
//! ## Modules
//!
//! - `bound`: `BoundType` (`Closed`/`Open`) and the side-aware boundary tests.
//! - `endpoint`: `Endpoint<T>`, an immutable value plus bound type.
//! - `element`: `RangeElement`, the per-type policy the engine is generic
//!   over, implemented for `i32`, `i64`, `f32`, `f64` and `char`.
//! - `range`: the `Range<T>` engine, its iterator and the legacy aliases
//!   (`IntegerRange`, `LongRange`, `FloatRange`, `DoubleRange`,
//!   `CharacterRange`).
//! - `builder`: `RangeBuilder<T>`, the validated options struct.
//! - `ranges`: construction entry points, generic and per element type.
//! - `error`: `RangeError<T>`, returned when a range cannot be built.
//!
//! ## Usage
//!
//! ```rust
//! use functor_range::{bound::BoundType, ranges};
//!
//! let range = ranges::range_with_bounds(-5i32, BoundType::Closed, 5, BoundType::Closed, 3)?;
//! assert_eq!(range.iter().collect::<Vec<_>>(), vec![-5, -2, 1, 4]);
//! assert!(range.contains(1));
//! assert!(!range.contains(2));
//!
//! let letters = ranges::character_range('b', 'l')
//!     .left_bound(BoundType::Open)
//!     .right_bound(BoundType::Closed)
//!     .step(3)
//!     .build()?;
//! assert_eq!(letters.to_string(), "CharacterRange<(b, l], 3>");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bound;
pub mod builder;
pub mod element;
pub mod endpoint;
pub mod error;
pub mod range;
pub mod ranges;
