//! Criterion benchmarks for sponsor-classifier.
//!
//! Covers the three decision paths: an early restrictive hit, a friendly
//! posting that scans the full restrictive table, and a work-authorization
//! posting that falls through to the context scan.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sponsor_classifier::ClassifierEngine;
use sponsor_core::normalize::normalize;
use sponsor_core::traits::IClassifier;

const FILLER: &str = "You will design, build and operate services used by millions of \
     customers. We value ownership, curiosity and thoughtful code review. ";

fn posting(body: &str) -> String {
    format!("{}{body} {}", FILLER.repeat(20), FILLER.repeat(20))
}

fn bench_restricted(c: &mut Criterion) {
    let engine = ClassifierEngine::new();
    let text = normalize(&posting("This role is subject to ITAR regulations."));
    c.bench_function("classify_restricted_itar", |b| {
        b.iter(|| engine.classify(black_box(&text)))
    });
}

fn bench_friendly(c: &mut Criterion) {
    let engine = ClassifierEngine::new();
    let text = normalize(&posting("We are happy to say we will sponsor H-1B visas."));
    c.bench_function("classify_friendly", |b| {
        b.iter(|| engine.classify(black_box(&text)))
    });
}

fn bench_work_authorization(c: &mut Criterion) {
    let engine = ClassifierEngine::new();
    let text = normalize(&posting("Work authorization is required for this role."));
    c.bench_function("classify_work_authorization", |b| {
        b.iter(|| engine.classify(black_box(&text)))
    });
}

fn bench_normalize(c: &mut Criterion) {
    let raw = posting("Applicants must be \u{201C}US citizens\u{201D}.");
    c.bench_function("normalize_posting", |b| b.iter(|| normalize(black_box(&raw))));
}

criterion_group!(
    benches,
    bench_restricted,
    bench_friendly,
    bench_work_authorization,
    bench_normalize
);
criterion_main!(benches);
