//! Declarative pipeline configuration.
//!
//! A social pipeline can be described as JSON and built at runtime:
//!
//! ```json
//! {
//!   "name": "positive-brazil",
//!   "stages": [
//!     { "stage": "text_cleaning" },
//!     { "stage": "sentiment", "sentiment": "positive" },
//!     { "stage": "country", "countries": ["Brasil"] },
//!     { "stage": "spam", "max_repeated_chars": 4 },
//!     { "stage": "text_metrics" }
//!   ]
//! }
//! ```
//!
//! Each entry maps onto one [`SocialCommentPipeline`] builder method.

use crate::filters::social::SpamDetector;
use crate::social_pipeline::SocialCommentPipeline;
use comments::Sentiment;
use serde::{Deserialize, Serialize};

/// A named, ordered list of stages.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub stages: Vec<StageConfig>,
}

/// One stage and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum StageConfig {
    TextCleaning,
    Sentiment {
        #[serde(default = "default_sentiment")]
        sentiment: Sentiment,
    },
    Language {
        language: String,
    },
    Country {
        countries: Vec<String>,
    },
    Likes {
        #[serde(default)]
        min: i64,
        #[serde(default)]
        max: Option<i64>,
    },
    Engagement,
    Spam {
        #[serde(default = "default_max_repeated_chars")]
        max_repeated_chars: usize,
    },
    UserNormalization,
    TextMetrics,
}

fn default_sentiment() -> Sentiment {
    Sentiment::Positive
}

fn default_max_repeated_chars() -> usize {
    SpamDetector::DEFAULT_MAX_REPEATED_CHARS
}

impl PipelineConfig {
    /// Parse a configuration document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Build the described pipeline.
    pub fn build(&self) -> SocialCommentPipeline {
        tracing::debug!(
            "Building pipeline {:?} with {} stages",
            self.name.as_deref().unwrap_or("unnamed"),
            self.stages.len()
        );
        self.stages
            .iter()
            .fold(SocialCommentPipeline::new(), |pipeline, stage| stage.append_to(pipeline))
    }
}

impl StageConfig {
    fn append_to(&self, pipeline: SocialCommentPipeline) -> SocialCommentPipeline {
        match self {
            StageConfig::TextCleaning => pipeline.add_text_cleaning(),
            StageConfig::Sentiment { sentiment } => pipeline.add_sentiment_filter(*sentiment),
            StageConfig::Language { language } => pipeline.add_language_filter(language),
            StageConfig::Country { countries } => pipeline.add_country_filter(countries.iter().cloned()),
            StageConfig::Likes { min, max } => pipeline.add_likes_filter(*min, *max),
            StageConfig::Engagement => pipeline.add_engagement_analysis(),
            StageConfig::Spam { max_repeated_chars } => pipeline.add_spam_detection(*max_repeated_chars),
            StageConfig::UserNormalization => pipeline.add_user_normalization(),
            StageConfig::TextMetrics => pipeline.add_text_metrics(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::social::fixtures::sample_comments;

    const CONFIG: &str = r#"{
        "name": "engaged-europe",
        "stages": [
            { "stage": "text_cleaning" },
            { "stage": "country", "countries": ["França", "Alemanha"] },
            { "stage": "likes", "min": 50 },
            { "stage": "engagement" },
            { "stage": "spam" }
        ]
    }"#;

    #[test]
    fn test_parse_config() {
        let config = PipelineConfig::from_json(CONFIG).unwrap();

        assert_eq!(config.name.as_deref(), Some("engaged-europe"));
        assert_eq!(config.stages.len(), 5);
        assert_eq!(config.stages[2], StageConfig::Likes { min: 50, max: None });
        assert_eq!(config.stages[4], StageConfig::Spam { max_repeated_chars: 3 });
    }

    #[test]
    fn test_build_runs_stages_in_order() {
        let pipeline = PipelineConfig::from_json(CONFIG).unwrap().build();

        assert_eq!(
            pipeline.stage_names(),
            ["CleanText", "CountryFilter", "LikesRangeFilter", "EngagementScore", "SpamDetector"]
        );

        let output = pipeline.execute(sample_comments());
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].country.as_deref(), Some("França"));
        assert!(output[0].spam.is_some());
    }

    #[test]
    fn test_unknown_stage_is_rejected() {
        let result = PipelineConfig::from_json(r#"{"stages": [{"stage": "teleport"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let config = PipelineConfig {
            name: None,
            stages: vec![StageConfig::Language { language: "klingon".to_string() }],
        };

        // Portuguese keywords only match the first sample
        let output = config.build().execute(sample_comments());
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].post_id.as_deref(), Some("post_0001"));
    }
}
