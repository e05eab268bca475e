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

//! # Functor Generator
//!
//! Push-based generation on top of pull-based iteration. A `Generator` feeds
//! every value it produces to a procedure; the procedure answers with
//! `ControlFlow::Break` to stop the generator early. Ranges and any other
//! iterator source are bridged in with `IteratorToGenerator`.
//!
//! ## Modules
//!
//! - `generator`: the `Generator` trait, the `Completion` outcome and the
//!   provided folds and collectors.
//! - `adapter`: `IteratorToGenerator`, wrapping any `IntoIterator`.
//! - `filtered`: `FilteredGenerator`, forwarding values that pass a predicate.
//! - `transformed`: `TransformedGenerator`, mapping each value through a function.
//! - `while_generate` / `until_generate`: truncating generators that stop the
//!   wrapped generator at the first value failing (or passing) a predicate.
//!
//! ## Usage
//!
//! ```rust
//! use functor_generator::{adapter::IteratorToGenerator, generator::Generator};
//!
//! let squares: Vec<i32> = IteratorToGenerator::new(1..=10)
//!     .filter(|v| v % 2 == 1)
//!     .transform(|v| v * v)
//!     .until_generate(|v| *v > 50)
//!     .to_collection();
//! assert_eq!(squares, vec![1, 9, 25, 49]);
//! ```

pub mod adapter;
pub mod filtered;
pub mod generator;
pub mod transformed;
pub mod until_generate;
pub mod while_generate;
