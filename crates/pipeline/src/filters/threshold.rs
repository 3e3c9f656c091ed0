//! Numeric threshold filter.

use crate::traits::{Filter, Stream};
use serde_json::Value;

/// Keeps numbers strictly greater than a threshold.
///
/// Numbers at or below the threshold are excluded. Non-numeric values are
/// passed through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct FilterGreaterThan {
    threshold: f64,
}

impl FilterGreaterThan {
    /// Threshold used by the text-processing preset.
    pub const DEFAULT_THRESHOLD: f64 = 10.0;

    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for FilterGreaterThan {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl Filter<Value> for FilterGreaterThan {
    fn name(&self) -> &str {
        "FilterGreaterThan"
    }

    fn apply<'a>(&'a self, input: Stream<'a, Value>) -> Stream<'a, Value> {
        Box::new(input.filter(move |value| match value.as_f64() {
            Some(number) => number > self.threshold,
            None => true,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(filter: &FilterGreaterThan, input: Vec<Value>) -> Vec<Value> {
        filter.apply(Box::new(input.into_iter())).collect()
    }

    #[test]
    fn test_filter_greater_than_default() {
        let output = run(
            &FilterGreaterThan::default(),
            vec![json!(5), json!(10), json!(15), json!(20)],
        );
        assert_eq!(output, vec![json!(15), json!(20)]);
    }

    #[test]
    fn test_filter_greater_than_custom_threshold() {
        let output = run(&FilterGreaterThan::new(15.0), vec![json!(5), json!(16), json!(15.5)]);
        assert_eq!(output, vec![json!(16), json!(15.5)]);
    }

    #[test]
    fn test_filter_greater_than_mixed_types() {
        let output = run(&FilterGreaterThan::new(10.0), vec![json!(5), json!("abc"), json!(15)]);
        assert_eq!(output, vec![json!("abc"), json!(15)]);
    }
}
