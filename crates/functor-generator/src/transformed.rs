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

//! A generator that maps each value through a function.

use crate::generator::{Completion, Generator};
use std::ops::ControlFlow;

/// Maps every value of the wrapped generator through a function.
///
/// Created by `Generator::transform`.
#[derive(Clone)]
pub struct TransformedGenerator<G, F> {
    inner: G,
    function: F,
}

impl<G, F> TransformedGenerator<G, F> {
    /// Wraps `inner`, forwarding `function(value)` for every value.
    #[inline]
    pub fn new(inner: G, function: F) -> Self {
        Self { inner, function }
    }
}

impl<G, F> std::fmt::Debug for TransformedGenerator<G, F>
where
    G: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformedGenerator")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<G, F, B> Generator for TransformedGenerator<G, F>
where
    G: Generator,
    F: FnMut(G::Item) -> B,
{
    type Item = B;

    fn run<Q>(&mut self, mut procedure: Q) -> Completion
    where
        Q: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let function = &mut self.function;
        self.inner.run(|item| procedure(function(item)))
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
    fn test_transform_range() {
        let range = ranges::double_range(0.0, 1.0).step(0.25).build().unwrap();
        let halves: Vec<f64> = IteratorToGenerator::new(&range)
            .transform(|v| v * 2.0)
            .to_collection();
        assert_eq!(halves, vec![0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_transform_changes_item_type() {
        let labels: Vec<String> = IteratorToGenerator::new(1..=3)
            .transform(|v| format!("#{}", v))
            .to_collection();
        assert_eq!(labels, vec!["#1", "#2", "#3"]);
    }
}
