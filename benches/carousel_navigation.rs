// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel navigation operations.
//!
//! Measures the performance of:
//! - Navigation operations (next/previous) across a large gallery
//! - The file-chosen workflow (append + re-center)

use criterion::{criterion_group, criterion_main, Criterion};
use panel_kit::application::GallerySession;
use panel_kit::domain::gallery::{ItemCollectionStore, SourceRef};
use panel_kit::domain::ui::VisibleCount;
use std::hint::black_box;

fn gallery(items: usize) -> GallerySession {
    let store = ItemCollectionStore::with_sources(
        (0..items).map(|n| SourceRef::Url(format!("https://example.com/{n}.png"))),
    );
    GallerySession::new(store, VisibleCount::new(3))
}

/// Benchmark navigation operations (next/previous).
///
/// Walks to the end and back, including the no-op calls at each boundary.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");
    let session = gallery(1_000);

    group.bench_function("walk_to_end_and_back", |b| {
        b.iter(|| {
            let mut nav = session.clone();
            while !nav.next().is_at_end {}
            black_box(nav.next());
            while !nav.previous().is_at_start {}
            black_box(nav.viewport());
        });
    });

    group.finish();
}

/// Benchmark the file-chosen workflow.
///
/// Measures append plus the atomic viewport re-center.
fn bench_file_chosen(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");
    let session = gallery(100);

    group.bench_function("file_chosen", |b| {
        b.iter(|| {
            let mut nav = session.clone();
            black_box(nav.on_file_chosen(SourceRef::Url("blob:new".to_string())));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_navigate, bench_file_chosen);
criterion_main!(benches);
