//! Seed expansion with a chained variant of Sebastiano Vigna's [`SplitMix64`].
//!
//! [`SplitMix64`]: http://xoroshiro.di.unimi.it/splitmix64.c

use alloc::vec::Vec;

/// The increment applied to the accumulator before every word, ⌊2^64 / φ⌋.
pub const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

const MIX_MULT_1: u64 = 0xbf58_476d_1ce4_e5b9;
const MIX_MULT_2: u64 = 0x94d0_49bb_1331_11eb;

/// Advances `seed` by one SplitMix64 step and returns the new word.
///
/// The whole recurrence is applied to the accumulator in place, so the returned word is also the
/// next accumulator value. Repeated calls on the same accumulator produce the sequence returned by
/// [`expand`].
///
/// Written in 2015 by Sebastiano Vigna (vigna@acm.org)
///
/// To the extent possible under law, the author has dedicated all copyright and related and
/// neighboring rights to this software to the public domain worldwide. This software is
/// distributed without any warranty.
///
/// See <http://creativecommons.org/publicdomain/zero/1.0/>.
#[inline]
pub fn splitmix64(seed: &mut u64) -> u64 {
    let mut z = (*seed).overflowing_add(GOLDEN_GAMMA).0;
    z = (z ^ (z >> 30)).overflowing_mul(MIX_MULT_1).0;
    z = (z ^ (z >> 27)).overflowing_mul(MIX_MULT_2).0;
    z ^= z >> 31;
    *seed = z;
    z
}

/// An endless stream of expanded words.
///
/// ```
/// use xoroseed::splitmix64::{expand, SplitMix64};
///
/// let words: Vec<u64> = SplitMix64::new(7).take(5).collect();
/// assert_eq!(words, expand(7, 5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Starts a stream at `seed`. Every seed is valid, zero included.
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl Iterator for SplitMix64 {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        Some(splitmix64(&mut self.state))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Expands `seed` into `count` words.
///
/// Deterministic and total: the same `seed` and `count` always give the same words.
///
/// ```
/// use xoroseed::splitmix64::expand;
///
/// assert_eq!(expand(0, 1), [0xe220_a839_7b1d_cdaf]);
/// assert!(expand(0, 0).is_empty());
/// ```
pub fn expand(seed: u64, count: u32) -> Vec<u64> {
    let mut words = alloc::vec![0; count as usize];
    expand_into(seed, &mut words);
    words
}

/// Fills `out` with the first `out.len()` words of the expansion of `seed`.
#[inline]
pub fn expand_into(seed: u64, out: &mut [u64]) {
    let mut z = seed;
    for word in out.iter_mut() {
        *word = splitmix64(&mut z);
    }
}

/// Expands `seed` into four words, enough for two single-lane generators.
#[inline]
pub fn expand4(seed: u64) -> [u64; 4] {
    let mut words = [0; 4];
    expand_into(seed, &mut words);
    words
}

/// Expands `seed` into the eight words of a 4-lane generator state.
///
/// The second half is expanded from the third word of the first half rather than from `seed`.
/// Because each word chains from the previous one, the fifth word repeats the fourth.
#[inline]
pub fn expand8(seed: u64) -> [u64; 8] {
    let lo = expand4(seed);
    let hi = expand4(lo[2]);

    [lo[0], lo[1], lo[2], lo[3], hi[0], hi[1], hi[2], hi[3]]
}
