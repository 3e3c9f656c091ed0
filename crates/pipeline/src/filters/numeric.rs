//! Filters for numeric strings.
//!
//! Used together, `FilterNumericStrings` and `ConvertToIntegers` turn a
//! stream of raw text into integers:
//! `["123", "abc", "456"]` → `["123", "456"]` → `[123, 456]`.

use crate::traits::{Filter, Stream};
use serde_json::Value;

/// Keeps only strings that look like numbers.
///
/// A string qualifies when, ignoring `-`, `.` and `,`, it is non-empty and
/// made of ASCII digits. Other strings are excluded; non-string values are
/// passed through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterNumericStrings;

impl Filter<Value> for FilterNumericStrings {
    fn name(&self) -> &str {
        "FilterNumericStrings"
    }

    fn apply<'a>(&'a self, input: Stream<'a, Value>) -> Stream<'a, Value> {
        Box::new(input.filter(|value| match value {
            Value::String(text) => {
                let numeric = is_numeric_string(text);
                if !numeric {
                    tracing::trace!("Excluding non-numeric string {:?}", text);
                }
                numeric
            }
            _ => true,
        }))
    }
}

/// Whether `text` is digits with only signs and decimal separators mixed in.
pub fn is_numeric_string(text: &str) -> bool {
    let mut digits = text.chars().filter(|c| !matches!(c, '-' | '.' | ','));
    let mut any = false;
    let all_digits = digits.all(|c| {
        any = true;
        c.is_ascii_digit()
    });
    any && all_digits
}

/// Converts numeric strings to integers.
///
/// Thousands separators (`,`) are removed, the rest is parsed as a decimal
/// number and truncated toward zero. Strings that fail to parse are dropped
/// from the stream; non-string values are passed through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertToIntegers;

impl Filter<Value> for ConvertToIntegers {
    fn name(&self) -> &str {
        "ConvertToIntegers"
    }

    fn apply<'a>(&'a self, input: Stream<'a, Value>) -> Stream<'a, Value> {
        Box::new(input.filter_map(|value| match value {
            Value::String(text) => match parse_integer(&text) {
                Some(number) => Some(Value::from(number)),
                None => {
                    tracing::trace!("Dropping unparseable string {:?}", text);
                    None
                }
            },
            other => Some(other),
        }))
    }
}

/// Parse `text` as a number and truncate it to an integer.
pub fn parse_integer(text: &str) -> Option<i64> {
    let cleaned = text.replace(',', "");
    let number: f64 = cleaned.trim().parse().ok()?;
    if !number.is_finite() || number < i64::MIN as f64 || number > i64::MAX as f64 {
        return None;
    }
    Some(number.trunc() as i64)
}
