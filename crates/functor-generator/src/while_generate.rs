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

//! A generator that forwards values while a predicate holds.

use crate::generator::{Completion, Generator};
use std::ops::ControlFlow;

/// Forwards values while `predicate` holds and stops the wrapped generator at
/// the first value that fails it. That value is not forwarded.
///
/// Created by `Generator::while_generate`.
///
/// # Examples
///
/// ```rust
/// use functor_generator::{adapter::IteratorToGenerator, generator::Generator};
///
/// let mut generator = IteratorToGenerator::new(1..).while_generate(|v| *v < 4);
/// let values: Vec<u32> = generator.to_collection();
/// assert_eq!(values, vec![1, 2, 3]);
/// assert!(generator.is_stopped());
/// ```
#[derive(Clone)]
pub struct WhileGenerate<G, P> {
    inner: G,
    predicate: P,
}

impl<G, P> WhileGenerate<G, P> {
    /// Wraps `inner`, generating while `predicate` returns `true`.
    #[inline]
    pub fn new(inner: G, predicate: P) -> Self {
        Self { inner, predicate }
    }
}

impl<G, P> std::fmt::Debug for WhileGenerate<G, P>
where
    G: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhileGenerate")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<G, P> Generator for WhileGenerate<G, P>
where
    G: Generator,
    P: FnMut(&G::Item) -> bool,
{
    type Item = G::Item;

    fn run<Q>(&mut self, mut procedure: Q) -> Completion
    where
        Q: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let predicate = &mut self.predicate;
        self.inner.run(|item| {
            if predicate(&item) {
                procedure(item)
            } else {
                ControlFlow::Break(())
            }
        })
    }

    #[inline]
    fn stop(&mut self) {
        self.inner.stop();
    }

    #[inline]
    fn is_stopped(&self) -> bool {
        self.inner.is_stopped()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        adapter::IteratorToGenerator,
        generator::{Completion, Generator},
    };
    use functor_range::ranges;

    #[test]
    fn test_while_on_descending_range() {
        let range = ranges::long_range(10, 0).build().unwrap();
        let mut generator = IteratorToGenerator::new(&range).while_generate(|v| *v > 6);
        let mut seen = Vec::new();
        assert_eq!(generator.for_each(|v| seen.push(v)), Completion::Stopped);
        assert_eq!(seen, vec![10, 9, 8, 7]);
    }

    #[test]
    fn test_while_that_always_holds_exhausts() {
        let mut generator = IteratorToGenerator::new(0..3).while_generate(|_| true);
        assert_eq!(generator.fold(0, |a, v| a + v), 3);
        assert!(!generator.is_stopped());
    }
}
