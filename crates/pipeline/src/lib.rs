//! Pipes and Filters: lazy, composable processing pipelines.
//!
//! This crate provides:
//! - The Filter trait every stage implements
//! - Pipeline for composing stages and running them lazily or eagerly
//! - Closure adapters for user-supplied stages
//! - A catalogue of text and social comment stages
//! - SocialCommentPipeline, a named-method builder for comment analysis
//!
//! ## Architecture
//! Data flows through the stages in the order they were added:
//! 1. A source produces an iterator of elements
//! 2. Each stage wraps the stream produced by the previous one
//! 3. Nothing runs until the final stream is iterated (`process`) or
//!    drained into a `Vec` (`execute`)
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Pipeline, SocialCommentPipeline};
//! use pipeline::filters::*;
//!
//! // Text: raw strings to integers above 10
//! let numbers = Pipeline::new()
//!     .add_filter(RemoveExtraSpaces)
//!     .add_filter(FilterNumericStrings)
//!     .add_filter(ConvertToIntegers)
//!     .add_filter(FilterGreaterThan::new(10.0))
//!     .execute(values);
//!
//! // Comments: enrich positive comments
//! let analysed = SocialCommentPipeline::new()
//!     .add_text_cleaning()
//!     .add_sentiment_filter(Sentiment::Positive)
//!     .add_engagement_analysis()
//!     .execute(comments);
//! ```

pub mod traits;
pub mod stage;
pub mod filters;
pub mod filter_pipeline;
pub mod social_pipeline;
pub mod presets;
pub mod config;

// Re-export main types
pub use traits::{Filter, Stream};
pub use stage::{Identity, Take, filter_fn, filter_map_fn, from_fn, map_fn};
pub use filter_pipeline::Pipeline;
pub use social_pipeline::SocialCommentPipeline;
pub use config::{PipelineConfig, StageConfig};
