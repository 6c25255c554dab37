//! OrderedSet benchmark.
//!
//! Measures incremental `append`, membership tests, and removal from the
//! front of the set, which forces every remaining position to shift.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use ordkit::collection::OrderedSet;
use std::hint::black_box;

const SIZES: [u32; 3] = [100, 1000, 10000];

fn generate_set(size: u32) -> OrderedSet<u32> {
    (0..size).collect()
}

fn batch_size_for(size: u32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_append(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_set_append");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("append", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = OrderedSet::with_capacity(size as usize);
                for element in 0..size {
                    set.append(black_box(element));
                }
                black_box(set)
            });
        });
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_set_contains");

    for size in SIZES {
        let set = generate_set(size);
        group.bench_with_input(BenchmarkId::new("contains", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut hits = 0_u32;
                for element in (0..size * 2).step_by(3) {
                    hits += u32::from(set.contains(black_box(&element)));
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

fn benchmark_remove_front(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_set_remove_front");

    for size in SIZES {
        let base_set = generate_set(size);
        group.bench_with_input(
            BenchmarkId::new("remove_front", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base_set.clone(),
                    |mut set| {
                        for element in 0..size.min(100) {
                            let _ = set.remove(black_box(&element));
                        }
                        black_box(set)
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_append,
    benchmark_contains,
    benchmark_remove_front
);
criterion_main!(benches);
