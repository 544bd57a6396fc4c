#[macro_use]
extern crate criterion;
extern crate xoroseed;

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use xoroseed::popcount::Strategy;

const TEST_VAL: u32 = 0xf0f0_f0f0;
const SAMPLE_SIZE: u32 = 1 << 20;

fn count(c: &mut Criterion) {
    let mut group = c.benchmark_group("popcount");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    for strategy in Strategy::ALL {
        group.bench_with_input(
            BenchmarkId::new(strategy.name(), SAMPLE_SIZE),
            &strategy,
            |b, &strategy| {
                b.iter(|| {
                    (0..SAMPLE_SIZE).fold(0, |sink, i| sink ^ strategy.count(black_box(TEST_VAL ^ i)))
                });
            },
        );
    }
}

criterion_group!(popcount, count);
criterion_main!(popcount);
