//! Stages over social [`Comment`](comments::Comment) records.
//!
//! Each stage documents how it treats comments missing the fields it
//! reads: either passed through unchanged or silently excluded.

pub mod clean_text;
pub mod engagement;
pub mod language;
pub mod selection;
pub mod spam;
pub mod text_metrics;
pub mod user_names;

pub use clean_text::CleanText;
pub use engagement::EngagementScore;
pub use language::{Language, LanguageFilter};
pub use selection::{CountryFilter, LikesRangeFilter, SentimentFilter};
pub use spam::SpamDetector;
pub use text_metrics::TextMetricsStage;
pub use user_names::NormalizeUserNames;
