//! Benchmarks for the comparison engine
//!
//! This benchmark measures:
//! - Matrix fill cost as the number of vectors grows
//! - Cost of requesting all four metrics at once at embedding-sized dimensions

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use embedding_compare::compare::compare;
use embedding_compare::embeddings::{Metric, Vector};

fn make_vectors(count: usize, dims: usize) -> Vec<Vector> {
    (0..count)
        .map(|i| {
            (0..dims)
                .map(|d| (((i * 31 + d * 17) % 97) as f32 / 97.0) - 0.5)
                .collect()
        })
        .collect()
}

fn bench_matrix_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_cosine");

    for count in [2usize, 8, 32] {
        let vectors = make_vectors(count, 1536);
        group.throughput(Throughput::Elements((count * count) as u64));
        group.bench_with_input(BenchmarkId::new("vectors", count), &vectors, |b, vectors| {
            b.iter(|| compare(black_box(vectors), &[Metric::Cosine]))
        });
    }

    group.finish();
}

fn bench_all_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_all_metrics");

    for dims in [256usize, 1536, 3072] {
        let vectors = make_vectors(8, dims);
        group.bench_with_input(BenchmarkId::new("dims", dims), &vectors, |b, vectors| {
            b.iter(|| compare(black_box(vectors), &Metric::ALL))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matrix_size, bench_all_metrics);
criterion_main!(benches);
