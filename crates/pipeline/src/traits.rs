//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait: a stage that consumes a lazy
//! stream of elements and produces another lazy stream, possibly of a
//! different element type or length.

use std::sync::Arc;

/// A lazy, single-pass sequence of elements.
///
/// Nothing is computed until the consumer calls `next`, and the stream may
/// be unbounded.
pub type Stream<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// Core trait for pipeline stages.
///
/// All stages must implement this trait to be used in a [`Pipeline`](crate::Pipeline).
///
/// ## Contract
/// - `apply` only wraps its upstream; it must not pull elements until the
///   returned stream is iterated. Aggregating stages (see
///   [`TopNByCount`](crate::filters::TopNByCount)) drain their whole input on
///   the first request instead of element by element.
/// - Elements arrive by value, so a stage that edits or augments a record
///   works on its own copy and upstream data is never touched.
/// - A malformed element never aborts the run: each stage documents whether
///   it passes such elements through or excludes them.
/// - Configuration is fixed at construction. `Send + Sync` lets a built
///   pipeline be shared read-only across threads.
/// - No I/O.
pub trait Filter<In, Out = In>: Send + Sync {
    /// Returns the name of this stage (for logging/debugging)
    fn name(&self) -> &str;

    /// Wrap the upstream sequence with this stage.
    fn apply<'a>(&'a self, input: Stream<'a, In>) -> Stream<'a, Out>;
}

impl<In, Out, F> Filter<In, Out> for Box<F>
where
    F: Filter<In, Out> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn apply<'a>(&'a self, input: Stream<'a, In>) -> Stream<'a, Out> {
        (**self).apply(input)
    }
}

impl<In, Out, F> Filter<In, Out> for Arc<F>
where
    F: Filter<In, Out> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn apply<'a>(&'a self, input: Stream<'a, In>) -> Stream<'a, Out> {
        (**self).apply(input)
    }
}
