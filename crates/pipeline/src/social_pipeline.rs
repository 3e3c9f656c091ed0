//! Pipeline specialized for social comment analysis.
//!
//! `SocialCommentPipeline` is a thin builder over [`Pipeline<Comment>`]:
//! every named method appends exactly one parameterized stage, in call
//! order. It adds no execution semantics of its own.

use crate::filter_pipeline::Pipeline;
use crate::filters::social::{
    CleanText, CountryFilter, EngagementScore, Language, LanguageFilter, LikesRangeFilter,
    NormalizeUserNames, SentimentFilter, SpamDetector, TextMetricsStage,
};
use crate::traits::{Filter, Stream};
use comments::{Comment, Sentiment};

/// Builder for comment-analysis pipelines.
///
/// ## Usage
/// ```ignore
/// let pipeline = SocialCommentPipeline::new()
///     .add_text_cleaning()
///     .add_sentiment_filter(Sentiment::Positive)
///     .add_likes_filter(10, None)
///     .add_text_metrics();
///
/// let analysed = pipeline.execute(comments.iter().cloned());
/// ```
///
/// Order matters: a likes filter placed before the engagement stage sees
/// only source fields, while a custom stage placed after it can read
/// `engagement_score`.
pub struct SocialCommentPipeline {
    inner: Pipeline<Comment>,
}

impl SocialCommentPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self {
            inner: Pipeline::new(),
        }
    }

    /// Append any stage over comments.
    pub fn add_filter<F>(self, filter: F) -> Self
    where
        F: Filter<Comment> + 'static,
    {
        Self {
            inner: self.inner.add_filter(filter),
        }
    }

    /// Strip special characters and normalize whitespace in the text.
    pub fn add_text_cleaning(self) -> Self {
        self.add_filter(CleanText)
    }

    /// Keep only comments with the given sentiment.
    pub fn add_sentiment_filter(self, sentiment: Sentiment) -> Self {
        self.add_filter(SentimentFilter::new(sentiment))
    }

    /// Keep only comments detected as `language`.
    ///
    /// Unrecognized language names fall back to Portuguese.
    pub fn add_language_filter(self, language: &str) -> Self {
        self.add_filter(LanguageFilter::new(Language::from_name_or_default(language)))
    }

    /// Keep only comments from one of `countries`.
    pub fn add_country_filter<I, S>(self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_filter(CountryFilter::new(countries))
    }

    /// Keep only comments with `min_likes <= likes <= max_likes`.
    pub fn add_likes_filter(self, min_likes: i64, max_likes: Option<i64>) -> Self {
        self.add_filter(LikesRangeFilter::new(min_likes, max_likes))
    }

    /// Attach an engagement score.
    pub fn add_engagement_analysis(self) -> Self {
        self.add_filter(EngagementScore)
    }

    /// Attach a spam verdict.
    pub fn add_spam_detection(self, max_repeated_chars: usize) -> Self {
        self.add_filter(SpamDetector::new(max_repeated_chars))
    }

    /// Attach a normalized user name.
    pub fn add_user_normalization(self) -> Self {
        self.add_filter(NormalizeUserNames)
    }

    /// Attach text metrics.
    pub fn add_text_metrics(self) -> Self {
        self.add_filter(TextMetricsStage)
    }

    /// See [`Pipeline::process`].
    pub fn process<'a, I>(&'a self, input: I) -> Stream<'a, Comment>
    where
        I: IntoIterator<Item = Comment>,
        I::IntoIter: 'a,
    {
        self.inner.process(input)
    }

    /// See [`Pipeline::execute`].
    pub fn execute<'a, I>(&'a self, input: I) -> Vec<Comment>
    where
        I: IntoIterator<Item = Comment>,
        I::IntoIter: 'a,
    {
        self.inner.execute(input)
    }

    /// See [`Pipeline::execute_par`].
    pub fn execute_par<I>(&self, inputs: Vec<I>) -> Vec<Vec<Comment>>
    where
        I: IntoIterator<Item = Comment> + Send,
        I::IntoIter: 'static,
    {
        self.inner.execute_par(inputs)
    }

    pub fn stage_names(&self) -> &[String] {
        self.inner.stage_names()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Unwrap into the generic pipeline, e.g. to append a type-changing stage.
    pub fn into_pipeline(self) -> Pipeline<Comment> {
        self.inner
    }
}

impl Default for SocialCommentPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SocialCommentPipeline> for Pipeline<Comment> {
    fn from(pipeline: SocialCommentPipeline) -> Self {
        pipeline.inner
    }
}

impl Filter<Comment> for SocialCommentPipeline {
    fn name(&self) -> &str {
        "SocialCommentPipeline"
    }

    fn apply<'a>(&'a self, input: Stream<'a, Comment>) -> Stream<'a, Comment> {
        self.inner.process(input)
    }
}
