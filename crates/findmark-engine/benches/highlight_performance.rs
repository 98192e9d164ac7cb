//! Benchmarks for the highlight engine
//!
//! Tests the performance of:
//! - Fragment parsing of article-sized content
//! - A full highlight pass (reverse + locate + mutate)
//! - Highlight reversal on a heavily marked tree

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use findmark_engine::{parse_fragment, Query, SearchEngine};

/// Generate an article body with varied prose for search scenarios
fn generate_article(paragraphs: usize) -> String {
    let bodies = [
        "The quick brown fox jumps over the lazy dog near the old stone wall.",
        "International tax treaties shape how cross-border income is assessed.",
        "Value added tax applies at each stage of the supply chain.",
        "Corporate residency rules determine where profits are ultimately taxed.",
        "Personal income brackets adjust annually for inflation and policy.",
        "Withholding obligations arise whenever payments cross a border.",
    ];

    let mut article = String::from("<h1>Annual Tax Guide</h1>");
    for i in 0..paragraphs {
        let body = bodies[i % bodies.len()];
        if i % 7 == 3 {
            article.push_str(&format!("<pre>rate_table[{i}] = {body:?}</pre>"));
        } else if i % 5 == 2 {
            article.push_str(&format!(
                "<p>{body} See <a href=\"/post/{i}\">related guidance</a> and <em>{body}</em></p>"
            ));
        } else {
            article.push_str(&format!("<p>{body}</p>"));
        }
    }
    article
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_fragment");
    for paragraphs in [10, 100, 500] {
        let source = generate_article(paragraphs);
        group.bench_with_input(
            BenchmarkId::from_parameter(paragraphs),
            &source,
            |b, source| b.iter(|| parse_fragment(black_box(source)).unwrap()),
        );
    }
    group.finish();
}

fn bench_highlight_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight_pass");
    for paragraphs in [10, 100, 500] {
        let source = generate_article(paragraphs);
        let root = parse_fragment(&source).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &root, |b, root| {
            let mut engine = SearchEngine::new();
            let query = Query::new("tax");
            b.iter_batched(
                || root.clone(),
                |mut root| engine.run_pass(black_box(&query), &mut root).unwrap(),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("clear_highlights");
    for paragraphs in [100, 500] {
        let source = generate_article(paragraphs);
        let mut root = parse_fragment(&source).unwrap();
        let mut engine = SearchEngine::new();
        engine.run_pass(&Query::new("the"), &mut root).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &root, |b, root| {
            let mut engine = SearchEngine::new();
            b.iter_batched(
                || root.clone(),
                |mut root| engine.clear(black_box(&mut root)).unwrap(),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_highlight_pass, bench_reverse);
criterion_main!(benches);
