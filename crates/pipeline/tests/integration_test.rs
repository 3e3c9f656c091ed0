//! Integration tests for the pipeline.
//!
//! These tests check the composition laws of the engine and run the
//! stage catalogue together over realistic input.

use comments::{Comment, Sentiment, parse_comments};
use pipeline::filters::social::{CleanText, EngagementScore, LikesRangeFilter, SpamDetector};
use pipeline::filters::*;
use pipeline::presets::create_text_processing_pipeline;
use pipeline::{Filter, Pipeline, SocialCommentPipeline, Take, filter_fn, map_fn};
use serde_json::{Value, json};
use std::cell::Cell;

fn raw_values() -> Vec<Value> {
    vec![
        json!("  123  "),
        json!("  abc  "),
        json!("  456  "),
        json!("  789  "),
        json!("  def  "),
        json!("  12   "),
        json!("  9 "),
        json!(3),
        json!("1,500"),
    ]
}

fn create_test_comments() -> Vec<Comment> {
    let json = r#"[
        {"post_id": "p1", "user": "ana souza", "country": "Brasil", "likes": 120,
         "text": "Adorei!!!!! muito bom", "sentiment": "positive"},
        {"post_id": "p2", "user": "bob", "country": "Canadá", "likes": 5,
         "text": "bad bad bad bad bad", "sentiment": "negative"},
        {"post_id": "p3", "user": "carla", "country": "Brasil", "likes": "lots",
         "text": "Não gostei do post", "sentiment": "negative"},
        {"post_id": "p4", "country": "Portugal", "likes": 40,
         "sentiment": "positive"},
        {"post_id": "p5", "user": "DIEGO", "country": "Brasil", "likes": 60,
         "text": "Excelente conteúdo, parabéns", "sentiment": "positive"},
        null,
        "not a comment"
    ]"#;
    let loaded = parse_comments(json).unwrap();
    assert_eq!(loaded.skipped, 2);
    loaded.comments
}

#[test]
fn test_identity_law() {
    let empty: Pipeline<Value> = Pipeline::new();
    assert_eq!(empty.execute(raw_values()), raw_values());

    let empty_comments = SocialCommentPipeline::new();
    assert_eq!(empty_comments.execute(create_test_comments()), create_test_comments());
}

#[test]
fn test_identity_keeps_undecodable_fields() {
    let loaded = parse_comments(r#"[{"text": "hi", "likes": "lots", "sentiment": "furious"}]"#).unwrap();
    let empty: Pipeline<Comment> = Pipeline::new();

    let output = empty.execute(loaded.comments);

    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        json!([{"likes": "lots", "sentiment": "furious", "text": "hi"}])
    );
}

#[test]
fn test_sequential_composition_law() {
    let pipeline = Pipeline::new()
        .add_filter(RemoveExtraSpaces)
        .add_filter(FilterNumericStrings);

    let after_f: Vec<Value> = RemoveExtraSpaces
        .apply(Box::new(raw_values().into_iter()))
        .collect();
    let after_g: Vec<Value> = FilterNumericStrings
        .apply(Box::new(after_f.into_iter()))
        .collect();

    assert_eq!(pipeline.execute(raw_values()), after_g);
}

#[test]
fn test_associativity() {
    let flat = Pipeline::new()
        .add_filter(RemoveExtraSpaces)
        .add_filter(FilterNumericStrings)
        .add_filter(ConvertToIntegers);

    let inner = Pipeline::new()
        .add_filter(RemoveExtraSpaces)
        .add_filter(FilterNumericStrings);
    let nested = Pipeline::new().add_filter(inner).add_filter(ConvertToIntegers);

    assert_eq!(nested.len(), 2);
    assert_eq!(flat.execute(raw_values()), nested.execute(raw_values()));
}

#[test]
fn test_text_processing_end_to_end() {
    let output = create_text_processing_pipeline().execute(raw_values());
    assert_eq!(output, vec![json!(123), json!(456), json!(789), json!(12), json!(1500)]);
}

#[test]
fn test_numeric_filter_then_conversion() {
    let numeric = Pipeline::new().add_filter(FilterNumericStrings);
    let converted = Pipeline::new()
        .add_filter(FilterNumericStrings)
        .add_filter(ConvertToIntegers);
    let input = vec![json!("123"), json!("abc"), json!("456")];

    assert_eq!(numeric.execute(input.clone()), vec![json!("123"), json!("456")]);
    assert_eq!(converted.execute(input), vec![json!(123), json!(456)]);
}

#[test]
fn test_no_element_processed_before_requested() {
    let pulled = Cell::new(0usize);
    let source = (0u64..).inspect(|_| pulled.set(pulled.get() + 1));
    let pipeline = Pipeline::new()
        .add_filter(filter_fn("even", |n: &u64| n % 2 == 0))
        .add_filter(map_fn("square", |n: u64| n * n));

    let mut stream = pipeline.process(source);
    assert_eq!(pulled.get(), 0);

    assert_eq!(stream.next(), Some(0));
    assert_eq!(stream.next(), Some(4));
    // 0, 1, 2 were needed to find two even numbers
    assert_eq!(pulled.get(), 3);
}

#[test]
fn test_take_bounds_infinite_source() {
    let pulled = Cell::new(0usize);
    let source = (1u64..).inspect(|_| pulled.set(pulled.get() + 1));
    let pipeline = Pipeline::new()
        .add_filter(map_fn("double", |n: u64| n * 2))
        .add_filter(Take::new(4));

    assert_eq!(pipeline.execute(source), vec![2, 4, 6, 8]);
    assert_eq!(pulled.get(), 4);
}

#[test]
fn test_malformed_comment_policies() {
    let comments = create_test_comments();
    assert_eq!(comments.len(), 5);

    // Pass-through stages keep every comment
    let cleaned = Pipeline::new().add_filter(CleanText).execute(comments.clone());
    let scored = Pipeline::new().add_filter(EngagementScore).execute(comments.clone());
    assert_eq!(cleaned.len(), 5);
    assert_eq!(scored.len(), 5);

    // p4 has no text
    let spam_checked = Pipeline::new().add_filter(SpamDetector::default()).execute(comments.clone());
    assert_eq!(spam_checked.len(), 4);

    // p3 has non-numeric likes
    let liked = Pipeline::new().add_filter(LikesRangeFilter::new(0, None)).execute(comments.clone());
    assert_eq!(liked.len(), 4);
    assert!(liked.iter().all(|c| c.post_id.as_deref() != Some("p3")));

    // p4 has no user
    let normalized = SocialCommentPipeline::new()
        .add_user_normalization()
        .execute(comments);
    assert_eq!(normalized.len(), 4);
    assert_eq!(normalized[3].user_normalized.as_deref(), Some("Diego"));
}

#[test]
fn test_social_pipeline_end_to_end() {
    let pipeline = SocialCommentPipeline::new()
        .add_text_cleaning()
        .add_sentiment_filter(Sentiment::Positive)
        .add_country_filter(["Brasil"])
        .add_engagement_analysis()
        .add_spam_detection(3)
        .add_text_metrics();

    let output = pipeline.execute(create_test_comments());

    let posts: Vec<_> = output.iter().filter_map(|c| c.post_id.as_deref()).collect();
    assert_eq!(posts, vec!["p1", "p5"]);

    // Cleaning ran first, so the repeated '!' never reaches the spam check
    assert_eq!(output[0].text.as_deref(), Some("Adorei muito bom"));
    assert!(!output[0].is_spam());
    assert_eq!(output[0].engagement_score, Some(14.4));
    assert_eq!(output[1].text_metrics.unwrap().word_count, 3);
}

#[test]
fn test_top_countries_after_filters() {
    let top_countries = SocialCommentPipeline::new()
        .add_likes_filter(10, None)
        .into_pipeline()
        .add_filter(TopNByCount::new(2, |c: &Comment| c.country.clone()));

    let output = top_countries.execute(create_test_comments());

    assert_eq!(output, vec![("Brasil".to_string(), 2), ("Portugal".to_string(), 1)]);
}

#[test]
fn test_pipeline_shared_across_threads() {
    let pipeline = create_text_processing_pipeline();
    let inputs = vec![raw_values(), vec![json!("11")], Vec::new()];

    let results = pipeline.execute_par(inputs);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0], pipeline.execute(raw_values()));
    assert_eq!(results[1], vec![json!(11)]);
    assert!(results[2].is_empty());
}
