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

use crate::{
    filtered::FilteredGenerator, transformed::TransformedGenerator,
    until_generate::UntilGenerate, while_generate::WhileGenerate,
};
use std::ops::ControlFlow;

/// How a call to `Generator::run` ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Completion {
    /// The source ran out of values.
    #[default]
    Exhausted,
    /// The generator was stopped, by a procedure returning `Break` or by `stop`.
    Stopped,
}

impl Completion {
    /// Returns `true` for `Stopped`.
    #[inline]
    pub const fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }
}

impl std::fmt::Display for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted => write!(f, "Exhausted"),
            Self::Stopped => write!(f, "Stopped"),
        }
    }
}

/// A source that pushes its values into a procedure.
///
/// Once stopped a generator stays stopped: later calls to `run` return
/// `Completion::Stopped` without producing anything.
///
/// # Examples
///
/// ```rust
/// use functor_generator::{adapter::IteratorToGenerator, generator::{Completion, Generator}};
/// use std::ops::ControlFlow;
///
/// let mut seen = Vec::new();
/// let mut generator = IteratorToGenerator::new(0..10);
/// let completion = generator.run(|v| {
///     seen.push(v);
///     if v == 3 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
/// });
/// assert_eq!(completion, Completion::Stopped);
/// assert_eq!(seen, vec![0, 1, 2, 3]);
/// assert!(generator.is_stopped());
/// ```
pub trait Generator {
    /// The type of the generated values.
    type Item;

    /// Feeds generated values to `procedure` until the source is exhausted or
    /// the procedure breaks.
    fn run<P>(&mut self, procedure: P) -> Completion
    where
        P: FnMut(Self::Item) -> ControlFlow<()>;

    /// Stops the generator.
    fn stop(&mut self);

    /// Returns `true` once the generator has been stopped.
    fn is_stopped(&self) -> bool;

    /// Feeds every generated value to `f`.
    fn for_each<F>(&mut self, mut f: F) -> Completion
    where
        F: FnMut(Self::Item),
    {
        self.run(|item| {
            f(item);
            ControlFlow::Continue(())
        })
    }

    /// Combines all generated values into one, left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functor_generator::{adapter::IteratorToGenerator, generator::Generator};
    ///
    /// let sum = IteratorToGenerator::new([1, 2, 3, 4]).fold(0, |acc, v| acc + v);
    /// assert_eq!(sum, 10);
    /// ```
    fn fold<B, F>(&mut self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = Some(init);
        self.for_each(|item| acc = acc.take().map(|a| f(a, item)));
        acc.expect("Generator::fold: accumulator is restored after every item")
    }

    /// Collects all generated values into a new collection.
    fn to_collection<C>(&mut self) -> C
    where
        C: Default + Extend<Self::Item>,
    {
        let mut collection = C::default();
        self.for_each(|item| collection.extend(std::iter::once(item)));
        collection
    }

    /// Forwards only the values that satisfy `predicate`.
    fn filter<P>(self, predicate: P) -> FilteredGenerator<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        FilteredGenerator::new(self, predicate)
    }

    /// Maps every value through `function`.
    fn transform<F, B>(self, function: F) -> TransformedGenerator<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        TransformedGenerator::new(self, function)
    }

    /// Forwards values while `predicate` holds, then stops.
    fn while_generate<P>(self, predicate: P) -> WhileGenerate<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        WhileGenerate::new(self, predicate)
    }

    /// Forwards values until one satisfies `predicate`, then stops without
    /// forwarding it.
    fn until_generate<P>(self, predicate: P) -> UntilGenerate<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        UntilGenerate::new(self, predicate)
    }
}
