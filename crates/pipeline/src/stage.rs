//! Building blocks for user-supplied stages.
//!
//! Most custom stages are a per-element predicate or mapping; the adapters
//! here turn plain closures into [`Filter`] implementations so callers don't
//! have to write the boxing themselves.
//!
//! ```ignore
//! let pipeline = Pipeline::new()
//!     .add_filter(filter_fn("even", |n: &i64| n % 2 == 0))
//!     .add_filter(map_fn("square", |n: i64| n * n))
//!     .add_filter(Take::new(10));
//! ```

use crate::traits::{Filter, Stream};
use std::marker::PhantomData;

/// Passes the input stream through untouched.
///
/// This is what an empty pipeline runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<T: 'static> Filter<T> for Identity {
    fn name(&self) -> &str {
        "Identity"
    }

    fn apply<'a>(&'a self, input: Stream<'a, T>) -> Stream<'a, T> {
        input
    }
}

/// Sequential composition: `tail(head(input))`.
pub(crate) struct Then<In, Mid, Out> {
    pub(crate) head: Box<dyn Filter<In, Mid>>,
    pub(crate) tail: Box<dyn Filter<Mid, Out>>,
}

impl<In: 'static, Mid: 'static, Out: 'static> Filter<In, Out> for Then<In, Mid, Out> {
    fn name(&self) -> &str {
        self.tail.name()
    }

    fn apply<'a>(&'a self, input: Stream<'a, In>) -> Stream<'a, Out> {
        self.tail.apply(self.head.apply(input))
    }
}

// =============================================================================
// Per-element adapters
// =============================================================================

/// Keeps the elements for which the predicate holds.
pub struct FilterFn<T, P> {
    name: String,
    predicate: P,
    _marker: PhantomData<fn(T)>,
}

/// Create a stage that keeps elements matching `predicate`.
pub fn filter_fn<T, P>(name: impl Into<String>, predicate: P) -> FilterFn<T, P>
where
    P: Fn(&T) -> bool + Send + Sync,
{
    FilterFn {
        name: name.into(),
        predicate,
        _marker: PhantomData,
    }
}

impl<T: 'static, P> Filter<T> for FilterFn<T, P>
where
    P: Fn(&T) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply<'a>(&'a self, input: Stream<'a, T>) -> Stream<'a, T> {
        Box::new(input.filter(move |item| (self.predicate)(item)))
    }
}

/// Transforms every element, possibly into another type.
pub struct MapFn<In, Out, F> {
    name: String,
    f: F,
    _marker: PhantomData<fn(In) -> Out>,
}

/// Create a stage that maps each element through `f`.
pub fn map_fn<In, Out, F>(name: impl Into<String>, f: F) -> MapFn<In, Out, F>
where
    F: Fn(In) -> Out + Send + Sync,
{
    MapFn {
        name: name.into(),
        f,
        _marker: PhantomData,
    }
}

impl<In: 'static, Out: 'static, F> Filter<In, Out> for MapFn<In, Out, F>
where
    F: Fn(In) -> Out + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply<'a>(&'a self, input: Stream<'a, In>) -> Stream<'a, Out> {
        Box::new(input.map(move |item| (self.f)(item)))
    }
}

/// Maps elements and drops those for which the closure returns `None`.
pub struct FilterMapFn<In, Out, F> {
    name: String,
    f: F,
    _marker: PhantomData<fn(In) -> Out>,
}

/// Create a stage that maps and filters in one pass.
pub fn filter_map_fn<In, Out, F>(name: impl Into<String>, f: F) -> FilterMapFn<In, Out, F>
where
    F: Fn(In) -> Option<Out> + Send + Sync,
{
    FilterMapFn {
        name: name.into(),
        f,
        _marker: PhantomData,
    }
}

impl<In: 'static, Out: 'static, F> Filter<In, Out> for FilterMapFn<In, Out, F>
where
    F: Fn(In) -> Option<Out> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply<'a>(&'a self, input: Stream<'a, In>) -> Stream<'a, Out> {
        Box::new(input.filter_map(move |item| (self.f)(item)))
    }
}

// =============================================================================
// Whole-stream adapters
// =============================================================================

/// A stage defined by a closure over the whole stream.
///
/// Use this for reshaping that isn't per-element (flattening, windowing,
/// skipping a header). The closure may not borrow its own captures into the
/// returned stream; copy small configuration values into inner closures.
pub struct FnStage<In, Out, F> {
    name: String,
    f: F,
    _marker: PhantomData<fn(In) -> Out>,
}

/// Create a stage from a stream-to-stream closure.
pub fn from_fn<In, Out, F>(name: impl Into<String>, f: F) -> FnStage<In, Out, F>
where
    F: for<'a> Fn(Stream<'a, In>) -> Stream<'a, Out> + Send + Sync,
{
    FnStage {
        name: name.into(),
        f,
        _marker: PhantomData,
    }
}

impl<In: 'static, Out: 'static, F> Filter<In, Out> for FnStage<In, Out, F>
where
    F: for<'a> Fn(Stream<'a, In>) -> Stream<'a, Out> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply<'a>(&'a self, input: Stream<'a, In>) -> Stream<'a, Out> {
        (self.f)(input)
    }
}

/// Bounds a stream to its first `limit` elements.
///
/// Upstream is never asked for more than `limit` elements, so this makes
/// `execute` terminate over an unbounded source.
#[derive(Debug, Clone, Copy)]
pub struct Take {
    limit: usize,
}

impl Take {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl<T: 'static> Filter<T> for Take {
    fn name(&self) -> &str {
        "Take"
    }

    fn apply<'a>(&'a self, input: Stream<'a, T>) -> Stream<'a, T> {
        Box::new(input.take(self.limit))
    }
}
