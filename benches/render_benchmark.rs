//! Benchmarks for table rendering and classification caching.
//!
//! Run with: cargo bench
//!
//! Every cell and row of a table consults the table's classification, so a
//! large table triggers thousands of lookups during one render; these
//! benchmarks track that the memoized path stays flat.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tabledown::{render, DomTree, RenderContext, RenderOptions};

fn build_document(tables: usize, rows: usize, cols: usize) -> DomTree {
    let mut tree = DomTree::new();
    for t in 0..tables {
        let table = tree.append_element(tree.root(), "table");
        let thead = tree.append_element(table, "thead");
        let header = tree.append_element(thead, "tr");
        for c in 0..cols {
            let th = tree.append_element(header, "th");
            tree.append_text(th, &format!("Column {c}"));
        }
        let tbody = tree.append_element(table, "tbody");
        for r in 0..rows {
            let row = tree.append_element(tbody, "tr");
            for c in 0..cols {
                let td = tree.append_element(row, "td");
                tree.append_text(td, &format!("t{t} r{r} c{c}"));
            }
        }
    }
    tree
}

fn bench_render_large_table(c: &mut Criterion) {
    let tree = build_document(1, 200, 10);
    c.bench_function("render_200x10_table", |b| {
        b.iter(|| render(black_box(&tree)).unwrap())
    });
}

fn bench_render_many_tables(c: &mut Criterion) {
    let tree = build_document(50, 20, 5);
    c.bench_function("render_50_tables_20x5", |b| {
        b.iter(|| render(black_box(&tree)).unwrap())
    });
}

fn bench_cached_classification(c: &mut Criterion) {
    let tree = build_document(1, 200, 10);
    let table = tree.children(tree.root())[0];
    let options = RenderOptions::default();
    c.bench_function("classification_2000_lookups", |b| {
        b.iter(|| {
            let ctx = RenderContext::new(&tree, &options);
            for _ in 0..2000 {
                black_box(ctx.classification(table));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_render_large_table,
    bench_render_many_tables,
    bench_cached_classification
);
criterion_main!(benches);
