//! Benchmarks for field operations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linrec::field::{ModField, DEFAULT_MODULUS};

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_mul");

    for modulus in [DEFAULT_MODULUS, (1 << 61) - 1] {
        let f = ModField::new(modulus).unwrap();
        let a = modulus - 12345;
        let b = modulus / 3;
        group.bench_with_input(BenchmarkId::new("modulus", modulus), &f, |bench, f| {
            bench.iter(|| f.mul(black_box(a), black_box(b)))
        });
    }

    group.finish();
}

fn bench_addition(c: &mut Criterion) {
    let f = ModField::new(DEFAULT_MODULUS).unwrap();

    c.bench_function("field_add", |bench| {
        bench.iter(|| f.add(black_box(DEFAULT_MODULUS - 5), black_box(67890)))
    });
}

fn bench_inverse(c: &mut Criterion) {
    let f = ModField::new(DEFAULT_MODULUS).unwrap();

    c.bench_function("field_inv", |bench| bench.iter(|| f.inv(black_box(12345))));
}

fn bench_pow(c: &mut Criterion) {
    let f = ModField::new(DEFAULT_MODULUS).unwrap();
    let mut group = c.benchmark_group("field_pow");

    for exp in [10u64, 1000, 1_000_000, u64::MAX] {
        group.bench_with_input(BenchmarkId::new("exp", exp), &exp, |bench, &exp| {
            bench.iter(|| f.pow(black_box(12345), exp))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiplication, bench_addition, bench_inverse, bench_pow);

criterion_main!(benches);
