//! User name normalization.

use crate::traits::{Filter, Stream};
use comments::Comment;

/// Attaches a capitalized form of the user name as `user_normalized`.
///
/// Each whitespace-separated word gets an uppercase first letter and
/// lowercase rest. Comments without a user are excluded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeUserNames;

impl Filter<Comment> for NormalizeUserNames {
    fn name(&self) -> &str {
        "NormalizeUserNames"
    }

    fn apply<'a>(&'a self, input: Stream<'a, Comment>) -> Stream<'a, Comment> {
        Box::new(input.filter_map(|mut comment| {
            let normalized = normalize_user_name(comment.user.as_deref()?);
            comment.user_normalized = Some(normalized);
            comment.extra.remove("user_normalized");
            Some(comment)
        }))
    }
}

/// Capitalize every word of a name.
pub fn normalize_user_name(name: &str) -> String {
    name.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
