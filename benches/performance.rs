//! Performance benchmarks for the in-memory history backend.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use state_history::{InMemoryBackend, Quark, RangeCondition, StateHistoryBackend, StateValue};

const NUM_ATTRIBUTES: Quark = 64;

/// Build a history of `n` intervals in near-sorted end-time order, the way a
/// state provider produces them while reading a trace.
fn build_history(n: usize) -> InMemoryBackend {
    let store = InMemoryBackend::new("bench", 0);
    for i in 0..n {
        let start = i as i64;
        let end = start + 20;
        store
            .insert(start, end, i % NUM_ATTRIBUTES, StateValue::Long(i as i64))
            .unwrap();
    }
    store
}

/// Benchmark insertion with varying history sizes
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("near_sorted", size), &size, |b, &size| {
            b.iter(|| black_box(build_history(size)));
        });
    }

    group.finish();
}

/// Benchmark point queries against varying history sizes
fn bench_point_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_query");

    for size in [1_000, 10_000, 100_000] {
        let store = build_history(size);
        let mid = store.end_time() / 2;

        group.bench_with_input(BenchmarkId::new("single", size), &size, |b, _| {
            b.iter(|| black_box(store.query_single(mid, 7).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("full_state", size), &size, |b, _| {
            b.iter(|| {
                let mut state = vec![None; NUM_ATTRIBUTES];
                store.query(&mut state, mid).unwrap();
                black_box(state)
            });
        });
    }

    group.finish();
}

/// Benchmark 2D range queries with varying window widths
fn bench_range_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_2d");

    let store = build_history(100_000);
    let end = store.end_time();

    for window in [100i64, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("window", window), &window, |b, &window| {
            let times = RangeCondition::new(end / 2, end / 2 + window).unwrap();
            let quarks = RangeCondition::new(0, NUM_ATTRIBUTES - 1).unwrap();
            b.iter(|| black_box(store.query_2d(quarks, times).count()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_point_queries, bench_range_queries);
criterion_main!(benches);
