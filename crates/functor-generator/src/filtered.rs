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

//! A generator that forwards only the values passing a predicate.

use crate::generator::{Completion, Generator};
use std::ops::ControlFlow;

/// Forwards the values of the wrapped generator that satisfy a predicate.
///
/// Created by `Generator::filter`.
#[derive(Clone)]
pub struct FilteredGenerator<G, P> {
    inner: G,
    predicate: P,
}

impl<G, P> FilteredGenerator<G, P> {
    /// Wraps `inner`, keeping values for which `predicate` returns `true`.
    #[inline]
    pub fn new(inner: G, predicate: P) -> Self {
        Self { inner, predicate }
    }
}

impl<G, P> std::fmt::Debug for FilteredGenerator<G, P>
where
    G: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteredGenerator")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<G, P> Generator for FilteredGenerator<G, P>
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
                ControlFlow::Continue(())
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
    use crate::{adapter::IteratorToGenerator, generator::Generator};
    use functor_range::ranges;

    #[test]
    fn test_filter_range() {
        let range = ranges::character_range('a', 'k').build().unwrap();
        let vowels: String = IteratorToGenerator::new(&range)
            .filter(|c| "aeiou".contains(*c))
            .to_collection();
        assert_eq!(vowels, "aei");
    }

    #[test]
    fn test_filter_rejecting_everything() {
        let mut generator = IteratorToGenerator::new(0..10).filter(|_| false);
        let mut count = 0;
        generator.for_each(|_| count += 1);
        assert_eq!(count, 0);
        assert!(!generator.is_stopped());
    }

    #[test]
    fn test_stop_reaches_inner() {
        let mut generator = IteratorToGenerator::new(0..10).filter(|v| v % 2 == 0);
        generator.stop();
        assert!(generator.is_stopped());
        assert!(format!("{:?}", generator).starts_with("FilteredGenerator"));
    }
}
