//! Criterion micro-benchmarks for box-array operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use holdall_array::BoxArray;
use holdall_bench::{fault_array, sparse_fault_array};
use holdall_faults::Fault;

fn bench_push(c: &mut Criterion) {
    c.bench_function("push_1k", |b| {
        b.iter(|| {
            let mut array = BoxArray::new();
            for _ in 0..1_000 {
                array.push(Box::new(Fault::Memory));
            }
            black_box(array.len())
        })
    });
}

fn bench_indexed_get(c: &mut Criterion) {
    let array = fault_array(1_000);
    c.bench_function("get_1k_sequential", |b| {
        b.iter(|| {
            let mut occupied = 0usize;
            for i in 0..array.len() {
                if array.get(i).unwrap().is_some() {
                    occupied += 1;
                }
            }
            black_box(occupied)
        })
    });
}

fn bench_deep_clone(c: &mut Criterion) {
    let dense = fault_array(1_000);
    c.bench_function("deep_clone_1k_dense", |b| {
        b.iter(|| black_box(dense.clone().len()))
    });

    let sparse = sparse_fault_array(1_000);
    c.bench_function("deep_clone_1k_sparse", |b| {
        b.iter(|| black_box(sparse.clone().len()))
    });
}

fn bench_remove_front(c: &mut Criterion) {
    c.bench_function("remove_at_front_1k", |b| {
        b.iter_batched(
            || fault_array(1_000),
            |mut array| {
                array.remove_at(0);
                black_box(array.len())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_push,
    bench_indexed_get,
    bench_deep_clone,
    bench_remove_front
);
criterion_main!(benches);
