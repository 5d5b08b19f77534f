//! Criterion benchmarks for the Pike index.
//!
//! Covers the analysis pipeline, building an index, single-document
//! mutations against a populated index, and ranked search.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pike::analysis::pipeline::{Pipeline, default_filter_factories, default_transform_factories};
use pike::analysis::tokenizer::RegexTokenizer;
use pike::index::Index;
use pike::index::config::SimpleConfig;

#[derive(Clone)]
struct Doc {
    cid: String,
    title: String,
    body: String,
}

const WORDS: &[&str] = &[
    "search",
    "engine",
    "full",
    "text",
    "index",
    "query",
    "document",
    "field",
    "term",
    "phrase",
    "vector",
    "similarity",
    "relevance",
    "score",
    "analysis",
    "tokenization",
    "stemming",
    "normalization",
    "algorithm",
    "structure",
    "performance",
    "memory",
    "retrieval",
    "ranking",
    "filtering",
];

/// Generate test documents with pseudo-random titles and bodies.
fn generate_test_documents(count: usize) -> Vec<Doc> {
    (0..count)
        .map(|i| {
            let body_length = 50 + (i % 100);
            let body: Vec<&str> = (0..body_length)
                .map(|j| WORDS[(i * 7 + j * 13) % WORDS.len()])
                .collect();
            let title: Vec<&str> = (0..3).map(|j| WORDS[(i * 11 + j * 5) % WORDS.len()]).collect();

            Doc {
                cid: format!("doc-{i}"),
                title: title.join(" "),
                body: body.join(" "),
            }
        })
        .collect()
}

fn new_index() -> Index<Doc> {
    Index::new(
        SimpleConfig::new(|d: &Doc| d.cid.clone())
            .field(|d: &Doc| d.title.clone(), 5.0)
            .field(|d: &Doc| d.body.clone(), 1.0),
    )
}

/// Benchmark the default analysis pipeline.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let pipeline = Pipeline::build(
        "bench",
        Arc::new(RegexTokenizer::separators().unwrap()),
        &default_transform_factories(),
        &default_filter_factories(),
    )
    .unwrap();
    let docs = generate_test_documents(100);

    group.bench_function("analyze_single_document", |b| {
        b.iter(|| black_box(pipeline.analyze(black_box(&docs[0].body))))
    });

    group.throughput(Throughput::Elements(docs.len() as u64));
    group.bench_function("analyze_batch_documents", |b| {
        b.iter(|| {
            for doc in &docs {
                let _ = black_box(pipeline.analyze(black_box(&doc.body)));
            }
        })
    });

    group.finish();
}

/// Benchmark building indexes of increasing size.
fn bench_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexing");
    group.sample_size(10);

    for size in [100, 500, 1000] {
        let docs = generate_test_documents(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("add_docs", size), &docs, |b, docs| {
            b.iter(|| black_box(new_index().add_docs(black_box(docs))))
        });
    }

    group.finish();
}

/// Benchmark single mutations on a populated index.
fn bench_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutations");

    let docs = generate_test_documents(1000);
    let (index, _) = new_index().add_docs(&docs[..999]);
    let extra = &docs[999];
    let existing = &docs[500];

    group.bench_function("add", |b| b.iter(|| black_box(index.add(black_box(extra)))));
    group.bench_function("remove", |b| {
        b.iter(|| black_box(index.remove(black_box(existing))))
    });
    group.bench_function("update", |b| {
        b.iter(|| black_box(index.update(black_box(existing))))
    });

    group.finish();
}

/// Benchmark ranked search with cold and warm IDF caches.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let (index, _) = new_index().add_docs(&generate_test_documents(1000));
    let queries = ["search engine", "vector similarity score", "ranking"];
    let (warm, _) = queries.iter().fold((index.clone(), Vec::new()), |(index, _), query| {
        index.search(query).unwrap()
    });

    for query in queries {
        group.bench_with_input(BenchmarkId::new("cold", query), query, |b, query| {
            b.iter(|| black_box(index.search(black_box(query))))
        });
        group.bench_with_input(BenchmarkId::new("warm", query), query, |b, query| {
            b.iter(|| black_box(warm.search(black_box(query))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_text_analysis,
    bench_indexing,
    bench_mutations,
    bench_search
);

criterion_main!(benches);
