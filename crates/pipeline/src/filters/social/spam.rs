//! Heuristic spam detection.
//!
//! The heuristics are illustrative: there is no precision or recall
//! target behind them.

use crate::traits::{Filter, Stream};
use comments::{Comment, SpamReason, SpamVerdict};
use std::collections::HashSet;

/// Flags comments that look like spam.
///
/// ## Heuristics
/// - repeated characters: some character repeats more than
///   `max_repeated_chars` times in a row
/// - repeated words: more than 3 words, fewer than half of them distinct
/// - suspicious length: fewer than 5 or more than 500 characters
///
/// Every comment with text passes through with a [`SpamVerdict`] attached;
/// comments without text are excluded.
#[derive(Debug, Clone, Copy)]
pub struct SpamDetector {
    max_repeated_chars: usize,
}

impl SpamDetector {
    pub const DEFAULT_MAX_REPEATED_CHARS: usize = 3;
    const MIN_LENGTH: usize = 5;
    const MAX_LENGTH: usize = 500;

    pub fn new(max_repeated_chars: usize) -> Self {
        Self { max_repeated_chars }
    }

    /// Run all heuristics over `text`.
    pub fn check(&self, text: &str) -> SpamVerdict {
        let mut reasons = Vec::new();
        if longest_run(text) > self.max_repeated_chars {
            reasons.push(SpamReason::RepeatedChars);
        }
        if has_repeated_words(text) {
            reasons.push(SpamReason::RepeatedWords);
        }
        let length = text.chars().count();
        if length < Self::MIN_LENGTH || length > Self::MAX_LENGTH {
            reasons.push(SpamReason::SuspiciousLength);
        }

        SpamVerdict {
            is_spam: !reasons.is_empty(),
            reasons,
        }
    }
}

impl Default for SpamDetector {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_REPEATED_CHARS)
    }
}

impl Filter<Comment> for SpamDetector {
    fn name(&self) -> &str {
        "SpamDetector"
    }

    fn apply<'a>(&'a self, input: Stream<'a, Comment>) -> Stream<'a, Comment> {
        Box::new(input.filter_map(move |mut comment| {
            let Some(text) = comment.text.as_deref() else {
                tracing::trace!("Excluding comment {:?} without text", comment.post_id);
                return None;
            };
            comment.spam = Some(self.check(text));
            comment.extra.remove("spam");
            Some(comment)
        }))
    }
}

/// Length of the longest run of one repeated character.
fn longest_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;
    for c in text.chars() {
        if Some(c) == previous {
            current += 1;
        } else {
            current = 1;
            previous = Some(c);
        }
        longest = longest.max(current);
    }
    longest
}

fn has_repeated_words(text: &str) -> bool {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= 3 {
        return false;
    }
    let distinct: HashSet<&str> = words.iter().copied().collect();
    (distinct.len() as f64) < words.len() as f64 * 0.5
}
