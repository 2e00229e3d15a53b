//! Benchmarks `parse` over synthetic long messages with heavy link,
//! Markdown, and emoji density, mirroring the teacher's
//! `benches/long_documents.rs`.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tamtam_tokenizer::{parse, ParseOptions};

fn long_plain_text(repeats: usize) -> String {
    "the quick brown fox jumps over the lazy dog. ".repeat(repeats)
}

fn long_mixed_content(repeats: usize) -> String {
    "check out https://example.com/path?x=1 and email me@example.com, *bold* text, \
     :) #tag @someone /command more words here to pad things out. "
        .repeat(repeats)
}

fn bench_plain_text(c: &mut Criterion) {
    let input = long_plain_text(200);
    c.bench_function("parse_long_plain_text", |b| {
        b.iter(|| parse(black_box(&input), ParseOptions::default()))
    });
}

fn bench_mixed_content(c: &mut Criterion) {
    let input = long_mixed_content(200);
    c.bench_function("parse_long_mixed_content", |b| {
        b.iter(|| parse(black_box(&input), ParseOptions::default()))
    });
}

fn bench_minimal_options(c: &mut Criterion) {
    let input = long_mixed_content(200);
    c.bench_function("parse_long_mixed_content_minimal_options", |b| {
        b.iter(|| parse(black_box(&input), ParseOptions::minimal()))
    });
}

criterion_group!(
    benches,
    bench_plain_text,
    bench_mixed_content,
    bench_minimal_options
);
criterion_main!(benches);
