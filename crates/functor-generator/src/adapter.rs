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

//! Bridges pull-based iterators into push-based generators.

use crate::generator::{Completion, Generator};
use std::ops::ControlFlow;

/// A generator that drains an iterator.
///
/// The iterator is consumed as values are generated, so a second `run`
/// continues where the first one stopped. Restartable sources such as
/// `&Range<T>` produce a fresh iterator for every adapter built from them.
///
/// # Examples
///
/// ```rust
/// use functor_generator::{adapter::IteratorToGenerator, generator::Generator};
///
/// let total = IteratorToGenerator::new(vec![1, 2, 3]).fold(0, |acc, v| acc + v);
/// assert_eq!(total, 6);
/// ```
#[derive(Clone, Debug)]
pub struct IteratorToGenerator<I> {
    iter: I,
    stopped: bool,
}

impl<I> IteratorToGenerator<I>
where
    I: Iterator,
{
    /// Creates a generator over the values of `source`.
    #[inline]
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: source.into_iter(),
            stopped: false,
        }
    }

    /// Returns the wrapped iterator, positioned after the last generated value.
    #[inline]
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I> Generator for IteratorToGenerator<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn run<P>(&mut self, mut procedure: P) -> Completion
    where
        P: FnMut(Self::Item) -> ControlFlow<()>,
    {
        if self.stopped {
            return Completion::Stopped;
        }
        for item in self.iter.by_ref() {
            if procedure(item).is_break() {
                self.stopped = true;
                return Completion::Stopped;
            }
        }
        Completion::Exhausted
    }

    #[inline]
    fn stop(&mut self) {
        self.stopped = true;
    }

    #[inline]
    fn is_stopped(&self) -> bool {
        self.stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use functor_range::{bound::BoundType, ranges};

    #[test]
    fn test_generates_range_values() {
        let range =
            ranges::range_with_bounds(-5, BoundType::Closed, 5, BoundType::Closed, 3).unwrap();
        let values: Vec<i32> = IteratorToGenerator::new(&range).to_collection();
        assert_eq!(values, vec![-5, -2, 1, 4]);
        // The range is restartable; a new adapter sees every value again.
        assert_eq!(IteratorToGenerator::new(&range).fold(0, |a, v| a + v), -2);
    }

    #[test]
    fn test_break_stops_for_good() {
        let mut generator = IteratorToGenerator::new(0..10);
        let mut seen = Vec::new();
        let completion = generator.run(|v| {
            seen.push(v);
            if v == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(completion, Completion::Stopped);
        assert!(generator.is_stopped());
        assert_eq!(generator.for_each(|v| seen.push(v)), Completion::Stopped);
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(generator.into_inner().next(), Some(3));
    }

    #[test]
    fn test_stop_before_run() {
        let mut generator = IteratorToGenerator::new(['x', 'y']);
        generator.stop();
        let mut count = 0;
        assert_eq!(generator.for_each(|_| count += 1), Completion::Stopped);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_second_run_continues_draining() {
        let mut generator = IteratorToGenerator::new(vec![1, 2, 3]);
        assert_eq!(generator.fold(0, |a, v| a + v), 6);
        assert_eq!(generator.fold(0, |a, v| a + v), 0);
        assert!(!generator.is_stopped());
    }
}
