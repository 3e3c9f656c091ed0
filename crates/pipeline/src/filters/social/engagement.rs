//! Engagement scoring.

use crate::traits::{Filter, Stream};
use comments::{Comment, Sentiment};

/// Attaches an engagement score derived from likes and sentiment.
///
/// ## Algorithm
/// `score = likes / 10 * multiplier`, rounded to two decimals, where the
/// multiplier is 1.2 for positive comments and 0.8 otherwise. Missing likes
/// count as zero, so every comment passes through with a score attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngagementScore;

impl EngagementScore {
    const POSITIVE_MULTIPLIER: f64 = 1.2;
    const DEFAULT_MULTIPLIER: f64 = 0.8;
}

impl Filter<Comment> for EngagementScore {
    fn name(&self) -> &str {
        "EngagementScore"
    }

    fn apply<'a>(&'a self, input: Stream<'a, Comment>) -> Stream<'a, Comment> {
        Box::new(input.map(|mut comment| {
            comment.engagement_score = Some(engagement_score(comment.likes_or_zero(), comment.sentiment));
            // A stale undecodable value would otherwise serialize as a duplicate key
            comment.extra.remove("engagement_score");
            comment
        }))
    }
}

/// Compute the engagement score for a likes count and sentiment.
pub fn engagement_score(likes: i64, sentiment: Option<Sentiment>) -> f64 {
    let base_score = likes as f64 / 10.0;
    let multiplier = match sentiment {
        Some(Sentiment::Positive) => EngagementScore::POSITIVE_MULTIPLIER,
        _ => EngagementScore::DEFAULT_MULTIPLIER,
    };
    round2(base_score * multiplier)
}

/// Round to two decimals, exact halves to even.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
