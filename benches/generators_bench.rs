//! Benchmark for the iterator recipes.
//!
//! Compares each recipe against the closest standard library idiom.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::HashSet;
use std::hint::black_box;
use taipan::generators::{batch, cycle_times, intertwine, unique};

// =============================================================================
// batch vs chunks
// =============================================================================

fn benchmark_batch(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("batch");

    for size in [100, 1000, 10000] {
        let values: Vec<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("batch", size), &size, |bencher, _| {
            bencher.iter(|| {
                let total: usize = batch(values.iter().copied(), 16)
                    .unwrap()
                    .map(|chunk| chunk.len())
                    .sum();
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("slice_chunks", size), &size, |bencher, _| {
            bencher.iter(|| {
                let total: usize = values.chunks(16).map(<[i32]>::len).sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// cycle_times vs Iterator::cycle
// =============================================================================

fn benchmark_cycle(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cycle");

    for size in [10, 100, 1000] {
        let values: Vec<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("cycle_times", size), &size, |bencher, _| {
            bencher.iter(|| {
                let total: i64 = cycle_times(values.iter().copied(), 10)
                    .unwrap()
                    .map(i64::from)
                    .sum();
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("std_cycle_take", size), &size, |bencher, _| {
            bencher.iter(|| {
                let total: i64 = values
                    .iter()
                    .copied()
                    .cycle()
                    .take(values.len() * 10)
                    .map(i64::from)
                    .sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// intertwine
// =============================================================================

fn benchmark_intertwine(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("intertwine");

    for sources in [2, 8, 32] {
        let iterables: Vec<Vec<i32>> = (0..sources)
            .map(|source| (0..1000).map(|value| value * source).collect())
            .collect();

        group.bench_with_input(BenchmarkId::new("intertwine", sources), &sources, |bencher, _| {
            bencher.iter(|| {
                let count = intertwine(iterables.iter().map(|source| source.iter())).count();
                black_box(count)
            });
        });
    }

    group.finish();
}

// =============================================================================
// unique vs HashSet filter
// =============================================================================

fn benchmark_unique(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique");

    for size in [100, 1000, 10000] {
        let values: Vec<i32> = (0..size).map(|value| value % 97).collect();

        group.bench_with_input(BenchmarkId::new("unique", size), &size, |bencher, _| {
            bencher.iter(|| {
                let count = unique(values.iter().copied()).count();
                black_box(count)
            });
        });

        group.bench_with_input(BenchmarkId::new("hashset_filter", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut seen = HashSet::new();
                let count = values.iter().filter(|value| seen.insert(**value)).count();
                black_box(count)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_batch,
    benchmark_cycle,
    benchmark_intertwine,
    benchmark_unique,
);

criterion_main!(benches);
