//! Text shape metrics.

use crate::filters::social::engagement::round2;
use crate::traits::{Filter, Stream};
use comments::{Comment, TextMetrics};

const PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Attaches [`TextMetrics`] computed from the comment text.
///
/// Comments without text are excluded.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMetricsStage;

impl Filter<Comment> for TextMetricsStage {
    fn name(&self) -> &str {
        "TextMetrics"
    }

    fn apply<'a>(&'a self, input: Stream<'a, Comment>) -> Stream<'a, Comment> {
        Box::new(input.filter_map(|mut comment| {
            let metrics = text_metrics(comment.text.as_deref()?);
            comment.text_metrics = Some(metrics);
            comment.extra.remove("text_metrics");
            Some(comment)
        }))
    }
}

/// Compute metrics for a text.
pub fn text_metrics(text: &str) -> TextMetrics {
    let char_count = text.chars().count();
    let word_count = text.split_whitespace().count();
    let avg_word_length = if word_count > 0 {
        round2(char_count as f64 / word_count as f64)
    } else {
        0.0
    };

    TextMetrics {
        char_count,
        word_count,
        avg_word_length,
        punctuation_count: text.chars().filter(|c| PUNCTUATION.contains(c)).count(),
        uppercase_count: text.chars().filter(|c| c.is_uppercase()).count(),
    }
}
