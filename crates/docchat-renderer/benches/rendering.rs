//! Benchmarks for answer rendering.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use docchat_renderer::{extract_table, format_response, render};

/// Generate an answer with the given number of sections.
fn generate_answer(sections: usize) -> String {
    let mut text = String::with_capacity(sections * 300);
    for i in 0..sections {
        text.push_str(&format!("## Section {i}\n"));
        text.push_str("Paragraph with a [link](https://example.com) and mail@example.com.\n");
        text.push_str("* first item\n* second item\n");
        text.push_str("**Bold summary**\n");
        text.push_str(&format!("| Key | Value |\n|-----|-------|\n| k{i} | v{i} |\n\n"));
    }
    text
}

fn bench_render_simple(c: &mut Criterion) {
    c.bench_function("render_simple_answer", |b| {
        b.iter(|| render("# Hello\nSimple content."));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_by_sections");
    for sections in [1, 10, 100] {
        let answer = generate_answer(sections);
        group.throughput(Throughput::Bytes(answer.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &answer, |b, text| {
            b.iter(|| render(text));
        });
    }
    group.finish();
}

fn bench_extract_table(c: &mut Criterion) {
    let answer = generate_answer(100);
    c.bench_function("extract_table_100_sections", |b| {
        b.iter(|| extract_table(&answer));
    });
}

fn bench_format_response(c: &mut Criterion) {
    let answer = generate_answer(10);
    c.bench_function("format_response_10_sections", |b| {
        b.iter(|| format_response(&answer));
    });
}

criterion_group!(
    benches,
    bench_render_simple,
    bench_render_varying_sizes,
    bench_extract_table,
    bench_format_response
);
criterion_main!(benches);
