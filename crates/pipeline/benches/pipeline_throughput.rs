//! Benchmarks for pipeline throughput
//!
//! Run with: cargo bench --package pipeline
//!
//! Measures the text preset, the comprehensive comment preset and the
//! parallel batch runner over generated input.

use comments::{Comment, Sentiment};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pipeline::presets::{create_comprehensive_social_pipeline, create_text_processing_pipeline};
use serde_json::Value;

const BATCH: usize = 10_000;

fn text_values(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| match i % 4 {
            0 => Value::String(format!("  {}  ", i)),
            1 => Value::String(format!("word {}", i)),
            2 => Value::String(format!("{},{:03}", i / 1000, i % 1000)),
            _ => Value::from(i as i64),
        })
        .collect()
}

fn comments(n: usize) -> Vec<Comment> {
    const COUNTRIES: [&str; 4] = ["Brasil", "França", "Alemanha", "Espanha"];
    (0..n)
        .map(|i| Comment {
            post_id: Some(format!("post_{:05}", i)),
            user: Some(format!("user number {}", i % 97)),
            country: Some(COUNTRIES[i % COUNTRIES.len()].to_string()),
            likes: Some((i % 250) as i64),
            text: Some(format!("Muito bom!!! comentário número {} sobre o post", i)),
            sentiment: Some(if i % 3 == 0 {
                Sentiment::Negative
            } else {
                Sentiment::Positive
            }),
            ..Comment::default()
        })
        .collect()
}

fn bench_text_pipeline(c: &mut Criterion) {
    let pipeline = create_text_processing_pipeline();
    let input = text_values(BATCH);

    c.bench_function("text_processing_10k", |b| {
        b.iter(|| {
            let output = pipeline.execute(black_box(input.iter().cloned()));
            black_box(output)
        })
    });
}

fn bench_comprehensive_social(c: &mut Criterion) {
    let pipeline = create_comprehensive_social_pipeline();
    let input = comments(BATCH);

    c.bench_function("comprehensive_social_10k", |b| {
        b.iter(|| {
            let output = pipeline.execute(black_box(input.iter().cloned()));
            black_box(output)
        })
    });
}

fn bench_execute_par(c: &mut Criterion) {
    let pipeline = create_comprehensive_social_pipeline();
    let input = comments(BATCH);

    c.bench_function("comprehensive_social_par_8x10k", |b| {
        b.iter(|| {
            let batches = vec![input.clone(); 8];
            let output = pipeline.execute_par(black_box(batches));
            black_box(output)
        })
    });
}

criterion_group!(
    benches,
    bench_text_pipeline,
    bench_comprehensive_social,
    bench_execute_par
);
criterion_main!(benches);
