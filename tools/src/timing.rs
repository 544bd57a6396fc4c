//! Times the popcount strategies over a fixed input pattern.

use std::{hint::black_box, time::Duration, time::Instant};
use xoroseed::popcount::Strategy;

/// Base input; iteration `i` counts the bits of `TEST_VAL ^ i`.
pub const TEST_VAL: u32 = 0xf0f0_f0f0;

/// Number of inputs counted per strategy by default.
pub const DEFAULT_ITERATIONS: u64 = 500_000_000;

/// The outcome of timing one strategy.
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    /// The strategy that was run.
    pub strategy: Strategy,
    /// Wall time for all iterations.
    pub elapsed: Duration,
    /// Xor of every count, returned so the work cannot be optimized away.
    pub sink: u32,
}

impl Timing {
    /// Elapsed time in milliseconds.
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }
}

/// Runs `strategy` over `iterations` inputs.
pub fn time_strategy(strategy: Strategy, iterations: u64) -> Timing {
    let mut sink = 0;

    let start = Instant::now();
    for i in 0..iterations {
        sink ^= strategy.count(black_box(TEST_VAL ^ i as u32));
    }
    let elapsed = start.elapsed();

    Timing {
        strategy,
        elapsed,
        sink: black_box(sink),
    }
}
