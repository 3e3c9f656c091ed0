//! Core record types for social comment datasets.
//!
//! A [`Comment`] carries the base fields produced by a dataset source plus
//! one optional slot per metric that pipeline stages may derive. Every base
//! field is optional: malformed input is represented, not rejected, and each
//! stage decides whether such a comment is passed through or excluded.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Base record
// =============================================================================

/// One comment posted on a social network.
///
/// Decoding never fails for a JSON object. A known field whose value has the
/// wrong type is left as `None` and its raw value is kept in `extra` under the
/// same key, so serializing the comment again reproduces the source record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// `None` when the source had no likes or a non-integral value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,

    // Derived by pipeline stages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_metrics: Option<TextMetrics>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spam: Option<SpamVerdict>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_normalized: Option<String>,

    /// Source fields this type does not model or could not decode, kept so
    /// they survive a round trip
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Comment {
    /// Create a comment holding only a text body.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Likes count, treating a missing value as zero.
    pub fn likes_or_zero(&self) -> i64 {
        self.likes.unwrap_or(0)
    }

    /// Whether a spam detector has flagged this comment.
    pub fn is_spam(&self) -> bool {
        self.spam.as_ref().is_some_and(|verdict| verdict.is_spam)
    }
}

impl<'de> Deserialize<'de> for Comment {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;

        let comment = Comment {
            post_id: take_field(&mut fields, "post_id", typed),
            user: take_field(&mut fields, "user", typed),
            country: take_field(&mut fields, "country", typed),
            state: take_field(&mut fields, "state", typed),
            likes: take_field(&mut fields, "likes", integral),
            text: take_field(&mut fields, "text", typed),
            sentiment: take_field(&mut fields, "sentiment", typed),
            engagement_score: take_field(&mut fields, "engagement_score", typed),
            text_metrics: take_field(&mut fields, "text_metrics", typed),
            spam: take_field(&mut fields, "spam", typed),
            user_normalized: take_field(&mut fields, "user_normalized", typed),
            extra: BTreeMap::new(),
        };

        // Whatever is left, unknown keys and undecodable values alike
        Ok(Comment {
            extra: fields.into_iter().collect(),
            ..comment
        })
    }
}

/// Remove `key` and decode it; on failure the raw value goes back into `fields`.
fn take_field<T>(
    fields: &mut Map<String, Value>,
    key: &str,
    decode: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let value = fields.remove(key)?;
    let decoded = decode(&value);
    if decoded.is_none() {
        tracing::trace!("Keeping undecodable field {:?} as raw value", key);
        fields.insert(key.to_string(), value);
    }
    decoded
}

fn typed<T: DeserializeOwned>(value: &Value) -> Option<T> {
    T::deserialize(value).ok()
}

/// Integers, plus floats with no fractional part (`12.0`).
fn integral(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64)
            .map(|n| n as i64)
    })
}

/// Sentiment label assigned to a comment by the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Derived metrics
// =============================================================================

/// Shape statistics of a comment's text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub char_count: usize,
    pub word_count: usize,
    /// Characters per word rounded to two decimals, 0.0 for empty text
    pub avg_word_length: f64,
    pub punctuation_count: usize,
    pub uppercase_count: usize,
}

/// Outcome of spam heuristics for one comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpamVerdict {
    pub is_spam: bool,
    /// Reasons in detection order, empty when `is_spam` is false
    pub reasons: Vec<SpamReason>,
}

/// Individual heuristic that marked a comment as spam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpamReason {
    RepeatedChars,
    RepeatedWords,
    SuspiciousLength,
}
