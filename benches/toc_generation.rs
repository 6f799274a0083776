//! Table-of-contents generation benchmarks
//!
//! Measures slug assignment and outline reconstruction on synthetic
//! documents of increasing size.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tocgen::{HeadingDepth, IRNode, TocBuilder, build_hierarchy, collect_headings};

/// A document with `sections` headings cycling through depths 1..=6,
/// every third title repeated so slugs need suffixes.
fn synthetic_document(sections: usize) -> Vec<IRNode> {
    let mut nodes = vec![IRNode::paragraph("[[TOC]]")];
    for i in 0..sections {
        let level = HeadingDepth::new((i % 6) as u8 + 1).unwrap_or(HeadingDepth::MIN);
        let title = if i % 3 == 0 { "Repeated Section".to_string() } else { format!("Section {}", i) };
        nodes.push(IRNode::heading(level, title));
        nodes.push(IRNode::paragraph("Body text for the section."));
    }
    nodes
}

fn bench_process(c: &mut Criterion) {
    let generator = TocBuilder::new().with_max_depth(6).build().expect("default options are valid");
    let mut group = c.benchmark_group("process_blocks");
    for size in [10, 100, 1_000] {
        let document = synthetic_document(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &document, |b, document| {
            b.iter(|| {
                let mut nodes = document.clone();
                black_box(generator.process_blocks(&mut nodes))
            })
        });
    }
    group.finish();
}

fn bench_build_hierarchy(c: &mut Criterion) {
    let document = synthetic_document(1_000);
    let records = collect_headings(&document, 0, None);
    c.bench_function("build_hierarchy_1000", |b| {
        b.iter(|| black_box(build_hierarchy(records.clone())))
    });
}

criterion_group!(benches, bench_process, bench_build_hierarchy);
criterion_main!(benches);
