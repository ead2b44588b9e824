use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use ketspace::{AcceleratedBackend, Complex, RowVector, SquareMatrix};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn real_vector(n: usize) -> RowVector<f64> {
    RowVector::from_fn(n, |i| (i % 17) as f64 - 8.0)
}

fn complex_vector(n: usize) -> RowVector<Complex<f64>> {
    RowVector::from_fn(n, |i| Complex::new((i % 13) as f64, -((i % 7) as f64)))
}

fn complex_matrix(n: usize) -> SquareMatrix<Complex<f64>> {
    SquareMatrix::from_fn(n, |i, j| Complex::new((i + j) as f64, i as f64 - j as f64))
}

// ---------------------------------------------------------------------------
// Vector addition: direct vs routed through the locked backend
// ---------------------------------------------------------------------------

fn vector_add(c: &mut Criterion) {
    let mut g = c.benchmark_group("vector_add_f64");
    let backend = AcceleratedBackend::default();

    for n in [16, 1024, 65536] {
        let a = real_vector(n);
        let b = real_vector(n);
        g.bench_with_input(BenchmarkId::new("direct", n), &n, |bench, _| {
            bench.iter(|| black_box(&a) + black_box(&b))
        });
        g.bench_with_input(BenchmarkId::new("backend", n), &n, |bench, _| {
            bench.iter(|| backend.add_vectors(black_box(&a), black_box(&b)))
        });
    }

    g.finish();
}

fn complex_vector_add(c: &mut Criterion) {
    let mut g = c.benchmark_group("vector_add_c64");
    let backend = AcceleratedBackend::default();

    for n in [16, 1024, 65536] {
        let a = complex_vector(n);
        let b = complex_vector(n);
        g.bench_with_input(BenchmarkId::new("direct", n), &n, |bench, _| {
            bench.iter(|| black_box(&a) + black_box(&b))
        });
        g.bench_with_input(BenchmarkId::new("backend", n), &n, |bench, _| {
            bench.iter(|| backend.add_vectors(black_box(&a), black_box(&b)))
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Matrix addition and multiplication
// ---------------------------------------------------------------------------

fn matrix_ops(c: &mut Criterion) {
    let mut g = c.benchmark_group("matrix_c64");
    let backend = AcceleratedBackend::default();

    for n in [4, 32] {
        let a = complex_matrix(n);
        let b = complex_matrix(n).adjoint();
        g.bench_with_input(BenchmarkId::new("add", n), &n, |bench, _| {
            bench.iter(|| black_box(&a) + black_box(&b))
        });
        g.bench_with_input(BenchmarkId::new("add_backend", n), &n, |bench, _| {
            bench.iter(|| backend.add_matrices(black_box(&a), black_box(&b)))
        });
        g.bench_with_input(BenchmarkId::new("mul", n), &n, |bench, _| {
            bench.iter(|| black_box(&a) * black_box(&b))
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------

criterion_group!(benches, vector_add, complex_vector_add, matrix_ops);
criterion_main!(benches);
