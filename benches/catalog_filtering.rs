// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for table filtering.
//!
//! Measures the performance of:
//! - Free-text search over a stock list scaled up from the sample rows
//! - Combined search and status filtering
//! - Document filtering with the category tab applied

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use logi_portal::domain::documents::{sample_documents, DocumentCategory};
use logi_portal::domain::inventory::{sample_items, InventoryItem, StockStatus};
use logi_portal::domain::search::{RowFilter, Selection};
use std::hint::black_box;

/// Repeats the sample stock list until it holds `rows` items.
fn stock_list(rows: usize) -> Vec<InventoryItem> {
    sample_items().into_iter().cycle().take(rows).collect()
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_filtering");

    for rows in [100, 1_000, 10_000] {
        let items = stock_list(rows);
        let mut filter = RowFilter::new();
        filter.query = "bearings".to_string();

        group.bench_with_input(BenchmarkId::new("query", rows), &items, |b, items| {
            b.iter(|| black_box(filter.apply(black_box(items)).len()));
        });
    }

    group.finish();
}

fn bench_query_and_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_filtering");

    let items = stock_list(10_000);
    let filter = RowFilter {
        query: "sku".to_string(),
        selection: Selection::Only(StockStatus::LowStock),
    };

    group.bench_function("query_and_status", |b| {
        b.iter(|| black_box(filter.apply(black_box(&items)).len()));
    });

    group.finish();
}

fn bench_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_filtering");

    let documents: Vec<_> = sample_documents().into_iter().cycle().take(5_000).collect();
    let filter = RowFilter::new();

    group.bench_function("documents_by_category", |b| {
        b.iter(|| {
            let visible = filter
                .apply(black_box(&documents))
                .into_iter()
                .filter(|document| DocumentCategory::Reports.includes(document.kind))
                .count();
            black_box(visible)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_query, bench_query_and_status, bench_documents);
criterion_main!(benches);
