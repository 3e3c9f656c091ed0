//! Keyword-based language selection.
//!
//! Detection is a fixed keyword list per language. It is a coarse
//! illustration, not a language identifier: a comment matches every
//! language whose keywords it happens to contain.

use crate::traits::{Filter, Stream};
use comments::Comment;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static PORTUGUESE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(não|sim|muito|bom|ruim|excelente|péssimo|adorei|gostei|não gostei)\b").unwrap()
});
static ENGLISH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(the|and|for|you|are|was|very|good|bad|excellent|terrible|love|like|hate)\b").unwrap()
});
static SPANISH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(el|la|de|que|y|es|muy|bueno|malo|excelente|terrible|me encantó|no me gustó)\b").unwrap()
});
static FRENCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(le|la|de|que|et|est|très|bon|mauvais|excellent|terrible|j'ai adoré|je n'ai pas aimé)\b").unwrap()
});
static GERMAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(der|die|das|und|für|ist|sehr|gut|schlecht|ausgezeichnet|schrecklich|ich liebe|ich hasse)\b").unwrap()
});

/// Languages with a keyword pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Portuguese,
    English,
    Spanish,
    French,
    German,
}

impl Language {
    /// Resolve a language by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "portuguese" => Some(Language::Portuguese),
            "english" => Some(Language::English),
            "spanish" => Some(Language::Spanish),
            "french" => Some(Language::French),
            "german" => Some(Language::German),
            _ => None,
        }
    }

    /// Resolve a language by name, falling back to the default for
    /// unrecognized names.
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            let fallback = Language::default();
            tracing::warn!("Unknown language {:?}, falling back to {:?}", name, fallback);
            fallback
        })
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Language::Portuguese => &PORTUGUESE,
            Language::English => &ENGLISH,
            Language::Spanish => &SPANISH,
            Language::French => &FRENCH,
            Language::German => &GERMAN,
        }
    }

    /// Whether `text` contains any of this language's keywords.
    pub fn detect(&self, text: &str) -> bool {
        self.pattern().is_match(&text.to_lowercase())
    }
}

/// Keeps comments whose text contains keywords of the target language.
///
/// Comments without text are excluded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageFilter {
    language: Language,
}

impl LanguageFilter {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl Filter<Comment> for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn apply<'a>(&'a self, input: Stream<'a, Comment>) -> Stream<'a, Comment> {
        Box::new(input.filter(move |comment| {
            comment
                .text
                .as_deref()
                .is_some_and(|text| self.language.detect(text))
        }))
    }
}
