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

//! # Numeric Foundations
//!
//! Traits describing how a value moves along an arithmetic progression.
//!
//! ## Submodules
//!
//! - `constants`: Associated step constants (`StepUnit`) giving the zero step
//!   and the unit step in each direction.
//! - `offset`: By-value stepping (`Offset`) that reports leaving the
//!   representable domain as `None` instead of wrapping.
//! - `stride`: Progression membership (`Stride`), answering whether a value is
//!   reached from an origin by a whole number of steps.
//!
//! ## Motivation
//!
//! Integers, floats and characters step differently: integers overflow,
//! floats accumulate rounding, and characters must avoid surrogate code
//! points. Hiding those differences behind three narrow traits keeps the
//! range engine generic without losing per-type semantics.

pub mod constants;
pub mod offset;
pub mod stride;
