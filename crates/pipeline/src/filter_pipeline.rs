//! The Pipeline chains filter stages together.
//!
//! This module provides the main Pipeline struct that composes stages
//! using the builder pattern and runs them lazily (`process`) or eagerly
//! (`execute`).

use crate::stage::{Identity, Then};
use crate::traits::{Filter, Stream};
use rayon::prelude::*;

/// Chains stages together into a processing pipeline.
///
/// `In` is the element type fed to the first stage and `Out` the element
/// type produced by the last one. Appending a stage that changes the
/// element type changes `Out`, so a stage whose input doesn't match the
/// previous output is rejected at compile time.
///
/// ## Usage
/// ```ignore
/// let pipeline = Pipeline::new()
///     .add_filter(RemoveExtraSpaces)
///     .add_filter(FilterNumericStrings)
///     .add_filter(ConvertToIntegers)
///     .add_filter(FilterGreaterThan::new(10.0));
///
/// let numbers = pipeline.execute(raw_values);
/// ```
///
/// A built pipeline is immutable: `add_filter` consumes it and returns a
/// new one, while `process`/`execute` only borrow it. It can be run any
/// number of times, from any number of threads.
pub struct Pipeline<In, Out = In> {
    chain: Box<dyn Filter<In, Out>>,
    stage_names: Vec<String>,
}

impl<T: 'static> Pipeline<T> {
    /// Create a new empty Pipeline (the identity transform).
    pub fn new() -> Self {
        Self {
            chain: Box::new(Identity),
            stage_names: Vec::new(),
        }
    }
}

impl<T: 'static> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In: 'static, Out: 'static> Pipeline<In, Out> {
    /// Add a stage to the end of the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any stage whose input type is this pipeline's output type
    ///
    /// # Returns
    /// The extended pipeline, for method chaining
    pub fn add_filter<Next, F>(self, filter: F) -> Pipeline<In, Next>
    where
        Next: 'static,
        F: Filter<Out, Next> + 'static,
    {
        let mut stage_names = self.stage_names;
        stage_names.push(filter.name().to_string());
        tracing::trace!("Added stage #{}: {}", stage_names.len(), filter.name());

        Pipeline {
            chain: Box::new(Then {
                head: self.chain,
                tail: Box::new(filter),
            }),
            stage_names,
        }
    }

    /// Compose all stages over `input` without running them.
    ///
    /// ## Algorithm
    /// Each stage wraps the stream produced by the previous one, so the
    /// result is `stage_N(...stage_1(input))`. No element is read from
    /// `input` until the returned stream is iterated. With no stages the
    /// input stream itself is returned.
    pub fn process<'a, I>(&'a self, input: I) -> Stream<'a, Out>
    where
        I: IntoIterator<Item = In>,
        I::IntoIter: 'a,
    {
        tracing::debug!("Composing pipeline with {} stages", self.stage_names.len());
        self.chain.apply(Box::new(input.into_iter()))
    }

    /// Run the pipeline to completion and collect the output in order.
    ///
    /// The source must be finite, or some stage must bound it (see
    /// [`Take`](crate::stage::Take)); otherwise this never returns.
    pub fn execute<'a, I>(&'a self, input: I) -> Vec<Out>
    where
        I: IntoIterator<Item = In>,
        I::IntoIter: 'a,
    {
        let output: Vec<Out> = self.process(input).collect();
        tracing::debug!(
            "Pipeline executed: {} stages (output count: {})",
            self.stage_names.len(),
            output.len()
        );
        output
    }

    /// Execute the pipeline over several independent inputs in parallel.
    ///
    /// Each input gets its own run; results come back in input order.
    pub fn execute_par<I>(&self, inputs: Vec<I>) -> Vec<Vec<Out>>
    where
        I: IntoIterator<Item = In> + Send,
        I::IntoIter: 'static,
        Out: Send,
    {
        inputs
            .into_par_iter()
            .map(|input| self.execute(input))
            .collect()
    }

    /// Names of the stages, in execution order.
    pub fn stage_names(&self) -> &[String] {
        &self.stage_names
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stage_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stage_names.is_empty()
    }
}

/// A pipeline is itself a stage, so pipelines nest.
impl<In: 'static, Out: 'static> Filter<In, Out> for Pipeline<In, Out> {
    fn name(&self) -> &str {
        "Pipeline"
    }

    fn apply<'a>(&'a self, input: Stream<'a, In>) -> Stream<'a, Out> {
        self.process(input)
    }
}
