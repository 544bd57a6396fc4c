#[macro_use]
extern crate criterion;
extern crate rand;
extern crate xoroseed;

use criterion::{black_box, BenchmarkId, Criterion};
use rand::Rng;
use xoroseed::decimal::{format_u64, parse_u64, MAX_DIGITS};

const SAMPLE_SIZE: usize = 10_000;

fn format(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal");

    let mut rng = rand::thread_rng();
    let values: Vec<u64> = (0..SAMPLE_SIZE).map(|_| rng.gen()).collect();

    group.bench_with_input(BenchmarkId::new("format_u64", SAMPLE_SIZE), &values, |b, values| {
        let mut buf = [0; MAX_DIGITS];
        b.iter(|| {
            for &v in values {
                black_box(format_u64(v, &mut buf));
            }
        });
    });

    group.bench_with_input(BenchmarkId::new("to_string", SAMPLE_SIZE), &values, |b, values| {
        b.iter(|| {
            for v in values {
                black_box(v.to_string());
            }
        });
    });
}

fn parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal");

    let mut rng = rand::thread_rng();
    let digits: Vec<String> = (0..SAMPLE_SIZE)
        .map(|_| rng.gen::<u64>().to_string())
        .collect();

    group.bench_with_input(BenchmarkId::new("parse_u64", SAMPLE_SIZE), &digits, |b, digits| {
        b.iter(|| {
            for d in digits {
                black_box(parse_u64(d.as_bytes()).unwrap());
            }
        });
    });
}

criterion_group!(decimal, format, parse);
criterion_main!(decimal);
