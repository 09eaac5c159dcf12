//! Benchmarks for lazy views vs hand-written std iterator chains
//!
//! Run with: `cargo bench --bench views`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use seqkit_core::{enumerate, head, is_in, range_step, reversed, zip};

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_step_sum");

    for size in [16, 1_024, 65_536] {
        group.bench_with_input(BenchmarkId::new("seqkit", size), &size, |b, &size| {
            b.iter(|| {
                let r = range_step(0i64, black_box(size), 3).expect("non-zero step");
                black_box(r.into_iter().sum::<i64>());
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &size, |b, &size| {
            b.iter(|| {
                black_box((0i64..black_box(size)).step_by(3).sum::<i64>());
            });
        });
    }

    group.finish();
}

fn bench_zip(c: &mut Criterion) {
    let mut group = c.benchmark_group("zip_dot_product");

    for size in [16, 1_024, 65_536] {
        let xs: Vec<f64> = (0..size).map(f64::from).collect();
        let ys: Vec<f64> = xs.iter().rev().copied().collect();

        group.bench_with_input(BenchmarkId::new("seqkit", size), &size, |b, _| {
            b.iter(|| {
                let dot: f64 = zip!(&xs, &ys).into_iter().map(|(x, y)| x * y).sum();
                black_box(dot);
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &size, |b, _| {
            b.iter(|| {
                let dot: f64 = xs.iter().zip(&ys).map(|(x, y)| x * y).sum();
                black_box(dot);
            });
        });
    }

    group.finish();
}

fn bench_composed(c: &mut Criterion) {
    let data: Vec<u32> = (0..4_096).collect();

    c.bench_function("enumerate_reversed_head", |b| {
        b.iter(|| {
            let total: isize = enumerate(head(reversed(&data), black_box(1_000)))
                .into_iter()
                .map(|(i, x)| i * *x as isize)
                .sum();
            black_box(total);
        });
    });
}

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");
    let values: Vec<u64> = (0..1_024).map(|v| v * 7).collect();
    let set: hashbrown::HashSet<u64> = values.iter().copied().collect();

    group.bench_function("linear_scan", |b| {
        b.iter(|| black_box(is_in!(black_box(7_000u64), values)));
    });

    group.bench_function("hash_lookup", |b| {
        b.iter(|| black_box(is_in!(black_box(7_000u64), set)));
    });

    group.bench_function("alternatives", |b| {
        b.iter(|| black_box(is_in!(black_box(5u64), 1, 2, 3, 4, 5)));
    });

    group.finish();
}

criterion_group!(benches, bench_range, bench_zip, bench_composed, bench_membership);
criterion_main!(benches);
