//! Criterion benchmarks: block size sweep against the naive baseline.

use block_matmul::{Matrix, multiply, multiply_naive};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn bench_block_sizes(c: &mut Criterion) {
    let size = 120;
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let a = Matrix::random(size, 0..=9, &mut rng).unwrap();
    let b = Matrix::random(size, 0..=9, &mut rng).unwrap();

    let mut group = c.benchmark_group(format!("multiply_{}x{}", size, size));
    group.sample_size(20);

    group.bench_function("naive_ijk", |bench| {
        bench.iter(|| multiply_naive(black_box(&a), black_box(&b)).unwrap())
    });

    for block_size in [1, 4, 12, 30, 60, 120] {
        group.bench_with_input(
            BenchmarkId::new("blocked", block_size),
            &block_size,
            |bench, &bs| bench.iter(|| multiply(black_box(&a), black_box(&b), bs).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_block_sizes);
criterion_main!(benches);
