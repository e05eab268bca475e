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

//! A generator that forwards values until a predicate first holds.

use crate::generator::{Completion, Generator};
use std::ops::ControlFlow;

/// Forwards values until one satisfies `predicate`, then stops the wrapped
/// generator. The satisfying value is not forwarded.
///
/// Created by `Generator::until_generate`.
#[derive(Clone)]
pub struct UntilGenerate<G, P> {
    inner: G,
    predicate: P,
}

impl<G, P> UntilGenerate<G, P> {
    /// Wraps `inner`, generating until `predicate` returns `true`.
    #[inline]
    pub fn new(inner: G, predicate: P) -> Self {
        Self { inner, predicate }
    }
}

impl<G, P> std::fmt::Debug for UntilGenerate<G, P>
where
    G: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UntilGenerate")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<G, P> Generator for UntilGenerate<G, P>
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
                ControlFlow::Break(())
            } else {
                procedure(item)
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
    fn test_until_on_float_range() {
        let range = ranges::float_range(0.0, 10.0).step(1.5).build().unwrap();
        let values: Vec<f32> = IteratorToGenerator::new(&range)
            .until_generate(|v| *v >= 4.0)
            .to_collection();
        assert_eq!(values, vec![0.0, 1.5, 3.0]);
    }

    #[test]
    fn test_until_stops_inner_generator() {
        let mut generator = IteratorToGenerator::new('a'..='z').until_generate(|c| *c == 'c');
        let mut seen = String::new();
        assert_eq!(generator.for_each(|c| seen.push(c)), Completion::Stopped);
        assert_eq!(seen, "ab");
        assert!(generator.is_stopped());
        assert_eq!(generator.for_each(|c| seen.push(c)), Completion::Stopped);
        assert_eq!(seen, "ab");
    }
}
