//! Stages selecting comments by a field value.
//!
//! All of these exclude comments that lack the field they test.

use crate::traits::{Filter, Stream};
use comments::{Comment, Sentiment};
use std::collections::HashSet;

/// Keeps comments with the given sentiment.
#[derive(Debug, Clone, Copy)]
pub struct SentimentFilter {
    sentiment: Sentiment,
}

impl SentimentFilter {
    pub fn new(sentiment: Sentiment) -> Self {
        Self { sentiment }
    }
}

impl Default for SentimentFilter {
    fn default() -> Self {
        Self::new(Sentiment::Positive)
    }
}

impl Filter<Comment> for SentimentFilter {
    fn name(&self) -> &str {
        "SentimentFilter"
    }

    fn apply<'a>(&'a self, input: Stream<'a, Comment>) -> Stream<'a, Comment> {
        Box::new(input.filter(move |comment| comment.sentiment == Some(self.sentiment)))
    }
}

/// Keeps comments posted from one of the given countries.
#[derive(Debug, Clone)]
pub struct CountryFilter {
    countries: HashSet<String>,
}

impl CountryFilter {
    pub fn new<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            countries: countries.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter<Comment> for CountryFilter {
    fn name(&self) -> &str {
        "CountryFilter"
    }

    fn apply<'a>(&'a self, input: Stream<'a, Comment>) -> Stream<'a, Comment> {
        Box::new(input.filter(move |comment| {
            comment
                .country
                .as_ref()
                .is_some_and(|country| self.countries.contains(country))
        }))
    }
}

/// Keeps comments whose likes fall within `[min, max]`.
///
/// `max` of `None` means no upper bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct LikesRangeFilter {
    min: i64,
    max: Option<i64>,
}

impl LikesRangeFilter {
    pub fn new(min: i64, max: Option<i64>) -> Self {
        Self { min, max }
    }

    /// Whether a likes count falls inside the range.
    pub fn contains(&self, likes: i64) -> bool {
        likes >= self.min && self.max.is_none_or(|max| likes <= max)
    }
}

impl Filter<Comment> for LikesRangeFilter {
    fn name(&self) -> &str {
        "LikesRangeFilter"
    }

    fn apply<'a>(&'a self, input: Stream<'a, Comment>) -> Stream<'a, Comment> {
        Box::new(input.filter(move |comment| match comment.likes {
            Some(likes) => self.contains(likes),
            None => {
                tracing::trace!("Excluding comment {:?} without likes", comment.post_id);
                false
            }
        }))
    }
}
