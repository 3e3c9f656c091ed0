//! Ready-made pipelines.

use crate::filter_pipeline::Pipeline;
use crate::filters::social::SpamDetector;
use crate::filters::{ConvertToIntegers, FilterGreaterThan, FilterNumericStrings, RemoveExtraSpaces};
use crate::social_pipeline::SocialCommentPipeline;
use crate::traits::Filter;
use serde_json::Value;

// =============================================================================
// Text processing
// =============================================================================

/// Raw text to integers above the default threshold:
/// spaces → numeric strings → integers → greater than 10.
pub fn create_text_processing_pipeline() -> Pipeline<Value> {
    Pipeline::new()
        .add_filter(RemoveExtraSpaces)
        .add_filter(FilterNumericStrings)
        .add_filter(ConvertToIntegers)
        .add_filter(FilterGreaterThan::default())
}

/// A pipeline running `filters` in order.
pub fn create_custom_pipeline<T: 'static>(filters: Vec<Box<dyn Filter<T>>>) -> Pipeline<T> {
    filters
        .into_iter()
        .fold(Pipeline::new(), |pipeline, filter| pipeline.add_filter(filter))
}

// =============================================================================
// Social comments
// =============================================================================

/// Cleaning, user normalization and text metrics.
pub fn create_basic_social_pipeline() -> SocialCommentPipeline {
    SocialCommentPipeline::new()
        .add_text_cleaning()
        .add_user_normalization()
        .add_text_metrics()
}

/// Cleaning, engagement score and text metrics.
pub fn create_sentiment_analysis_pipeline() -> SocialCommentPipeline {
    SocialCommentPipeline::new()
        .add_text_cleaning()
        .add_engagement_analysis()
        .add_text_metrics()
}

/// Cleaning, spam detection and text metrics.
pub fn create_spam_detection_pipeline() -> SocialCommentPipeline {
    SocialCommentPipeline::new()
        .add_text_cleaning()
        .add_spam_detection(SpamDetector::DEFAULT_MAX_REPEATED_CHARS)
        .add_text_metrics()
}

/// Cleaning, engagement score, at least 10 likes, text metrics.
pub fn create_engagement_analysis_pipeline() -> SocialCommentPipeline {
    SocialCommentPipeline::new()
        .add_text_cleaning()
        .add_engagement_analysis()
        .add_likes_filter(10, None)
        .add_text_metrics()
}

/// Cleaning, one language filter per entry of `languages`, text metrics.
///
/// Language filters are chained, so a comment must match every listed
/// language to survive.
pub fn create_multilingual_pipeline<S: AsRef<str>>(languages: &[S]) -> SocialCommentPipeline {
    let pipeline = languages
        .iter()
        .fold(SocialCommentPipeline::new().add_text_cleaning(), |pipeline, language| {
            pipeline.add_language_filter(language.as_ref())
        });
    pipeline.add_text_metrics()
}

/// Cleaning, country selection, user normalization, text metrics.
pub fn create_geographic_pipeline<I, S>(countries: I) -> SocialCommentPipeline
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SocialCommentPipeline::new()
        .add_text_cleaning()
        .add_country_filter(countries)
        .add_user_normalization()
        .add_text_metrics()
}

/// Every enrichment stage: cleaning, user normalization, engagement, spam,
/// text metrics.
pub fn create_comprehensive_social_pipeline() -> SocialCommentPipeline {
    SocialCommentPipeline::new()
        .add_text_cleaning()
        .add_user_normalization()
        .add_engagement_analysis()
        .add_spam_detection(SpamDetector::DEFAULT_MAX_REPEATED_CHARS)
        .add_text_metrics()
}
