//! Benchmarks for codeowners-parser-core
//!
//! Run with: cargo bench -p codeowners-parser-core --features generate
//!
//! Filter benchmarks:
//!   cargo bench -- "parsing"
//!   cargo bench -- "parsing/extended"
//!   cargo bench -- "lines"

use codeowners_parser_core::{ParserConfig, parse_line, parse_reader_with_config, parse_str};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

mod fixtures;
use fixtures::{fixtures, fixtures_extended};

/// Benchmark in-memory and streaming parsing across fixture sizes
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let config = ParserConfig::default();

    for (name, content) in fixtures() {
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse_str", name), content, |b, input| {
            b.iter(|| parse_str(std::hint::black_box(input)))
        });
        group.bench_with_input(
            BenchmarkId::new("parse_reader", name),
            content,
            |b, input| {
                b.iter(|| {
                    parse_reader_with_config(std::hint::black_box(input.as_bytes()), &config)
                })
            },
        );
    }
    group.finish();
}

/// Benchmark parsing with extended sizes (up to 3MB)
fn bench_parsing_extended(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing/extended");
    group.sample_size(10); // Fewer samples for large files
    let config = ParserConfig::default();

    for (name, content) in fixtures_extended() {
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("parse_reader", name),
            content,
            |b, input| {
                b.iter(|| {
                    parse_reader_with_config(std::hint::black_box(input.as_bytes()), &config)
                })
            },
        );
    }
    group.finish();
}

/// Benchmark single-line parsing for representative line shapes
fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");
    let lines = [
        ("comment", "# Frontend section"),
        ("single_owner", "*.rs @rustacean"),
        ("many_owners", "/src/api/ @alice @acme/backend bob@example.com @dev"),
        ("noisy", "/docs/ @docs /// 12412 aa @org/docs # @ignored"),
    ];

    for (name, line) in lines {
        group.bench_with_input(BenchmarkId::new("parse_line", name), line, |b, input| {
            b.iter(|| parse_line(std::hint::black_box(input)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parsing, bench_parsing_extended, bench_lines);
criterion_main!(benches);
