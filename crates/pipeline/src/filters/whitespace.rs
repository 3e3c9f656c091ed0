//! Whitespace normalization for text values.

use crate::traits::{Filter, Stream};
use serde_json::Value;

/// Collapses runs of whitespace into single spaces and trims both ends.
///
/// Non-string values are passed through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveExtraSpaces;

impl Filter<Value> for RemoveExtraSpaces {
    fn name(&self) -> &str {
        "RemoveExtraSpaces"
    }

    fn apply<'a>(&'a self, input: Stream<'a, Value>) -> Stream<'a, Value> {
        Box::new(input.map(|value| match value {
            Value::String(text) => Value::String(normalize_whitespace(&text)),
            other => other,
        }))
    }
}

/// Collapse whitespace runs and trim.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  hello  "), "hello");
        assert_eq!(normalize_whitespace("multiple    spaces"), "multiple spaces");
        assert_eq!(normalize_whitespace("\ttabs\nand lines "), "tabs and lines");
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[test]
    fn test_remove_extra_spaces_filter() {
        let input = vec![json!("  hello  "), json!("multiple    spaces"), json!(42)];

        let output: Vec<Value> = RemoveExtraSpaces.apply(Box::new(input.into_iter())).collect();

        assert_eq!(output, vec![json!("hello"), json!("multiple spaces"), json!(42)]);
    }
}
