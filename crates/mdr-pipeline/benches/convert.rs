//! Benchmarks for document conversion throughput.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mdr_pipeline::{ConvertConfig, convert};
use mdr_render::RendererKind;

/// Generate markdown content with specified structure.
fn generate_markdown(headings: usize, paragraphs_per_section: usize) -> String {
    let mut md = String::with_capacity(headings * 50 + headings * paragraphs_per_section * 200);
    md.push_str("# Document Title\n\n");

    for i in 0..headings {
        md.push_str(&format!("## Section {i}\n\n"));
        for j in 0..paragraphs_per_section {
            md.push_str(&format!(
                "This is paragraph {j} in section {i}. It contains **bold** and *italic* text.\n\n"
            ));
        }
    }
    md
}

fn bench_convert_simple(c: &mut Criterion) {
    let config = ConvertConfig::default();

    c.bench_function("convert_simple_markdown", |b| {
        b.iter(|| convert(b"# Hello\n\nSimple content.", &config));
    });
}

fn bench_convert_varying_sizes(c: &mut Criterion) {
    let config = ConvertConfig::default();

    let mut group = c.benchmark_group("convert_by_size");

    for (headings, paragraphs) in [(5, 2), (20, 3), (50, 5)] {
        let markdown = generate_markdown(headings, paragraphs);

        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("markdown", format!("{headings}h_{paragraphs}p")),
            &markdown,
            |b, markdown| b.iter(|| convert(markdown.as_bytes(), &config)),
        );
    }

    group.finish();
}

fn bench_convert_renderers(c: &mut Criterion) {
    let markdown = generate_markdown(20, 3);

    let mut group = c.benchmark_group("convert_by_renderer");
    group.throughput(Throughput::Bytes(markdown.len() as u64));

    for kind in [RendererKind::Html, RendererKind::HtmlToc, RendererKind::Latex] {
        let config = ConvertConfig {
            kind,
            toc_level: 3,
            ..ConvertConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new("renderer", kind.name()),
            &markdown,
            |b, markdown| b.iter(|| convert(markdown.as_bytes(), &config)),
        );
    }

    group.finish();
}

fn bench_convert_large_document(c: &mut Criterion) {
    let markdown = generate_markdown(100, 5); // ~100KB document
    let config = ConvertConfig::default();

    let mut group = c.benchmark_group("large_document");
    group.throughput(Throughput::Bytes(markdown.len() as u64));
    group.bench_function("convert", |b| {
        b.iter(|| convert(markdown.as_bytes(), &config));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_convert_simple,
    bench_convert_varying_sizes,
    bench_convert_renderers,
    bench_convert_large_document,
);

criterion_main!(benches);
