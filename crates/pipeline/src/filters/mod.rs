//! Filter implementations for the pipeline.
//!
//! This module contains the concrete stages that can be composed into a
//! Pipeline: generic text stages over `serde_json::Value`, the aggregating
//! top-N stage, and the social comment stages under [`social`].

pub mod numeric;
pub mod social;
pub mod threshold;
pub mod top_n;
pub mod whitespace;

// Re-export for convenience
pub use numeric::{ConvertToIntegers, FilterNumericStrings};
pub use threshold::FilterGreaterThan;
pub use top_n::TopNByCount;
pub use whitespace::RemoveExtraSpaces;
