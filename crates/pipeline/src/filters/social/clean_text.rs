//! Text cleanup for comment bodies.

use crate::filters::whitespace::normalize_whitespace;
use crate::traits::{Filter, Stream};
use comments::Comment;
use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is not a word character (accented letters included) or whitespace.
static SPECIAL_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Replaces special characters with spaces and normalizes whitespace.
///
/// Comments without text are passed through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanText;

impl Filter<Comment> for CleanText {
    fn name(&self) -> &str {
        "CleanText"
    }

    fn apply<'a>(&'a self, input: Stream<'a, Comment>) -> Stream<'a, Comment> {
        Box::new(input.map(|mut comment| {
            if let Some(text) = comment.text.take() {
                comment.text = Some(clean_text(&text));
            }
            comment
        }))
    }
}

/// Strip punctuation and symbols, keeping letters, digits and single spaces.
pub fn clean_text(text: &str) -> String {
    normalize_whitespace(&SPECIAL_CHARS.replace_all(text, " "))
}
