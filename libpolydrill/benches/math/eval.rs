#[macro_use]
extern crate criterion;
extern crate libpolydrill;

use criterion::{black_box, Criterion};
use libpolydrill::{Poly, Rational};

fn bench_eval_integer(c: &mut Criterion) {
    let poly = Poly::new(vec![-3, 0, 7, -1, 9, 2]);
    let x = Rational::from(-4);
    c.bench_function("eval_integer", |b| b.iter(|| black_box(&poly).eval(black_box(x))));
}

fn bench_eval_fraction(c: &mut Criterion) {
    let poly = Poly::new(vec![-3, 0, 7, -1, 9, 2]);
    let x = Rational::new(-3, 7).unwrap();
    c.bench_function("eval_fraction", |b| b.iter(|| black_box(&poly).eval(black_box(x))));
}

criterion_group!(eval_benches, bench_eval_integer, bench_eval_fraction);
criterion_main!(eval_benches);
