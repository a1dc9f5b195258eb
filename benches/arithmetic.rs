//! Benchmarks for arithmetic operations

extern crate criterion;
extern crate machin_pi;
extern crate oorandom;

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use machin_pi::FixedPoint;

mod common;
use common::*;

criterion_main!(
    kernels,
    pi,
);

criterion_group!(
    name = kernels;
    config = Criterion::default()
                       .sample_size(300);
    targets =
        bench_add_sub,
        bench_scale_divide,
        bench_reciprocal,
);

criterion_group!(
    name = pi;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(7))
                       .sample_size(20);
    targets =
        bench_arctan,
        bench_pi,
);


const BENCH_PRECISION: usize = 1000;

fn bench_add_sub(c: &mut Criterion) {
    let mut rng = RandomDigits::new(0x243f6a8885a308d313198a2e03707344);
    let x = rng.summand(BENCH_PRECISION);
    let y = rng.summand(BENCH_PRECISION);

    c.bench_function(
        "addition-1000",
        |b| b.iter_batched(
            || x.clone(),
            |mut sum| {
                sum += &y;
                black_box(sum);
            },
            criterion::BatchSize::SmallInput));

    let sum = x.clone() + &y;
    c.bench_function(
        "subtraction-1000",
        |b| b.iter_batched(
            || sum.clone(),
            |mut diff| {
                diff -= &y;
                black_box(diff);
            },
            criterion::BatchSize::SmallInput));
}

fn bench_scale_divide(c: &mut Criterion) {
    let mut rng = RandomDigits::new(0xa4093822299f31d0082efa98ec4e6c89);
    let value = rng.value(BENCH_PRECISION);

    c.bench_function(
        "scale-1000",
        |b| b.iter_batched(
            || value.clone(),
            |mut scaled| {
                black_box(scaled.scale(239));
                black_box(scaled);
            },
            criterion::BatchSize::SmallInput));

    c.bench_function(
        "division-1000",
        |b| b.iter_batched(
            || value.clone(),
            |mut quotient| {
                quotient /= 239;
                black_box(quotient);
            },
            criterion::BatchSize::SmallInput));

    let mut quotient = FixedPoint::zero(BENCH_PRECISION);
    c.bench_function(
        "set-quotient-1000",
        |b| b.iter(|| {
            quotient.set_quotient(black_box(&value), black_box(57121));
        }));
}

fn bench_reciprocal(c: &mut Criterion) {
    let mut value = FixedPoint::zero(BENCH_PRECISION);

    c.bench_function(
        "set-reciprocal-1000",
        |b| b.iter(|| {
            value.set_reciprocal(black_box(239));
        }));
}

fn bench_arctan(c: &mut Criterion) {
    c.bench_function(
        "arctan-239-100",
        |b| b.iter(|| {
            black_box(machin_pi::arctan_recip(black_box(239), 100));
        }));
}

fn bench_pi(c: &mut Criterion) {
    c.bench_function(
        "pi-100",
        |b| b.iter(|| {
            black_box(machin_pi::pi_with_precision(black_box(100)));
        }));
}
