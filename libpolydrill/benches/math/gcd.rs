#[macro_use]
extern crate criterion;
extern crate libpolydrill;

use criterion::{black_box, Criterion};
use libpolydrill::{_euclidean_gcd, gcd};

const INPUT: [(i64, i64); 3] = [
    (288_481, -22_783),
    (939_841_321, 28_847_717),
    (-48_812, 284_829),
];

fn bench_euclidean_gcd(c: &mut Criterion) {
    c.bench_function("euclidean_gcd", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                _euclidean_gcd(black_box(u.abs()), black_box(v.abs()));
            }
        })
    });
}

fn bench_signed_gcd(c: &mut Criterion) {
    c.bench_function("signed_gcd", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                gcd(black_box(*u), black_box(*v));
            }
        })
    });
}

fn bench_wide_gcd(c: &mut Criterion) {
    c.bench_function("wide_gcd", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                gcd(black_box(*u as i128), black_box(*v as i128));
            }
        })
    });
}

criterion_group!(gcd_benches, bench_euclidean_gcd, bench_signed_gcd, bench_wide_gcd);
criterion_main!(gcd_benches);
