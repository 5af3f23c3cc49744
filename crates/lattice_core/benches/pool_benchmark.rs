//! # Container Benchmark
//!
//! ARCHITECT'S REQUIREMENTS:
//! - O(1) allocate/release regardless of pool occupancy
//! - 0 heap allocations after construction
//!
//! Run with: `cargo bench --package lattice_core`

// Benchmarks don't need docs and may have intentionally unused code
#![allow(missing_docs)]
#![allow(dead_code)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lattice_core::{BoundedArray, SlotPool};

/// Pool sizes to exercise.
const POOL_SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Benchmark: allocate a pool to capacity, then release everything.
fn bench_pool_fill_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_fill_drain");

    for size in POOL_SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut pool: SlotPool<u64> = SlotPool::new(size, 1).unwrap();
                let mut handles = Vec::with_capacity(size);
                for i in 0..size {
                    handles.push(pool.allocate_with(0, i as u64).unwrap());
                }
                for handle in handles.drain(..) {
                    black_box(pool.release(handle).unwrap());
                }
                pool.free_count()
            });
        });
    }

    group.finish();
}

/// THE CRITICAL BENCHMARK: steady-state churn on a hot pool.
///
/// Allocation cost must not depend on how many slots are live.
fn bench_pool_churn(c: &mut Criterion) {
    let size = 10_000;
    let mut pool: SlotPool<u64> = SlotPool::new(size, 2).unwrap();
    let mut handles: Vec<_> = (0..size / 2)
        .map(|i| pool.allocate_with(i % 2, i as u64).unwrap())
        .collect();

    c.bench_function("pool_churn_half_full", |b| {
        b.iter(|| {
            let handle = handles.pop().unwrap();
            pool.release(handle).unwrap();
            handles.push(pool.allocate_with(0, 7).unwrap());
        });
    });
}

/// Benchmark: category walk over a fully live pool.
fn bench_pool_iteration(c: &mut Criterion) {
    let size = 10_000;
    let mut pool: SlotPool<u64> = SlotPool::new(size, 1).unwrap();
    for i in 0..size {
        pool.allocate_with(0, i as u64).unwrap();
    }

    c.bench_function("pool_iterate_10k", |b| {
        b.iter(|| {
            let sum: u64 = pool.iter(0).unwrap().map(|(_, v)| *v).sum();
            black_box(sum)
        });
    });
}

/// Benchmark: front insertion, the worst case for the bounded array.
fn bench_bounded_array_front_insert(c: &mut Criterion) {
    c.bench_function("bounded_array_front_insert_1k", |b| {
        b.iter(|| {
            let mut arr: BoundedArray<u64> = BoundedArray::new(1_000).unwrap();
            for i in 0..1_000 {
                arr.insert_at(0, i).unwrap();
            }
            arr.len()
        });
    });
}

criterion_group!(
    benches,
    bench_pool_fill_drain,
    bench_pool_churn,
    bench_pool_iteration,
    bench_bounded_array_front_insert
);
criterion_main!(benches);
