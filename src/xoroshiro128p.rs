//! Implements the single-lane [xoroshiro128+] generator.
//!
//! [xoroshiro128+]: https://prng.di.unimi.it/xoroshiro128plus.c

use crate::{prelude::rotl64, splitmix64::splitmix64};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "bincode")]
use bincode::{Decode, Encode};

/// Rotation applied to `s0` on every step.
pub(crate) const ROT_A: u32 = 55;
/// Left shift applied to the mixed `s1` on every step.
pub(crate) const SHIFT_B: u32 = 14;
/// Rotation applied to the mixed `s1` on every step.
pub(crate) const ROT_C: u32 = 36;

/// Advances one lane and returns the output computed from the state before the step.
///
/// `s1` is xored with `s0` before the new `s0` is computed; the new `s0` consumes the mixed `s1`.
#[inline(always)]
pub(crate) fn step(s0: &mut u64, s1: &mut u64) -> u64 {
    let result = s0.overflowing_add(*s1).0;

    *s1 ^= *s0;
    *s0 = rotl64(*s0, ROT_A) ^ *s1 ^ (*s1 << SHIFT_B);
    *s1 = rotl64(*s1, ROT_C);

    result
}

/// A xoroshiro128+ generator: 128 bits of state, 64 bits of output per step.
///
/// Xoroshiro128+ is fast and has a period of 2^128 - 1, but it is not cryptographically secure.
/// The lowest bits of its output have weak linear dependencies; prefer the high bits when fewer
/// than 64 are needed.
///
/// A generator is owned by a single user and mutated in place. Independent streams are obtained by
/// building independent generators from different seeds.
///
/// ```
/// use xoroseed::Xoroshiro128Plus;
///
/// let mut rng = Xoroshiro128Plus::new(0xdead_beef);
/// let first = rng.advance();
/// let again = Xoroshiro128Plus::new(0xdead_beef).advance();
/// assert_eq!(first, again);
///
/// // the generator is also an endless iterator
/// let dice: Vec<u64> = rng.by_ref().take(10).map(|x| (x >> 61) % 6 + 1).collect();
/// assert!(dice.iter().all(|d| (1..=6).contains(d)));
/// ```
///
/// Serializing and deserializing generator state can be enabled with the [`serde`] feature (or
/// [`bincode`] for bincode). A restored generator continues the stream where it was saved.
///
/// [`serde`]: http://serde.rs
/// [`bincode`]: https://docs.rs/bincode
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bincode", derive(Encode, Decode))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro128Plus {
    s0: u64,
    s1: u64,
}

impl Xoroshiro128Plus {
    /// Creates a generator whose state is the first two words expanded from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut z = seed;
        let s0 = splitmix64(&mut z);
        let s1 = splitmix64(&mut z);

        Self { s0, s1 }
    }

    /// Creates a generator from raw state words.
    ///
    /// The state must not be `(0, 0)`: the all-zero state is a fixed point and yields zeros forever.
    /// This is not checked.
    pub const fn from_state(s0: u64, s1: u64) -> Self {
        Self { s0, s1 }
    }

    /// Returns the current state words `(s0, s1)`.
    pub const fn state(&self) -> (u64, u64) {
        (self.s0, self.s1)
    }

    /// Returns the next output and advances the state by one step.
    #[inline]
    pub fn advance(&mut self) -> u64 {
        step(&mut self.s0, &mut self.s1)
    }

    /// Fills `out` with consecutive outputs.
    pub fn fill(&mut self, out: &mut [u64]) {
        for x in out.iter_mut() {
            *x = self.advance();
        }
    }
}

impl Iterator for Xoroshiro128Plus {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(feature = "rand")]
impl rand::RngCore for Xoroshiro128Plus {
    /// Returns the high half of the next output.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.advance() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.advance()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.advance().to_le_bytes());
        }

        let rest = chunks.into_remainder();
        if !rest.is_empty() {
            let bytes = self.advance().to_le_bytes();
            rest.copy_from_slice(&bytes[..rest.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(feature = "rand")]
impl rand::SeedableRng for Xoroshiro128Plus {
    type Seed = [u8; 16];

    /// Loads `s0` and `s1` from the little-endian halves of `seed`. An all-zero seed would be the
    /// degenerate state, so it is replaced by `Xoroshiro128Plus::new(0)`.
    fn from_seed(seed: [u8; 16]) -> Self {
        if seed.iter().all(|&b| b == 0) {
            return Self::new(0);
        }

        let mut lo = [0; 8];
        let mut hi = [0; 8];
        lo.copy_from_slice(&seed[..8]);
        hi.copy_from_slice(&seed[8..]);

        Self::from_state(u64::from_le_bytes(lo), u64::from_le_bytes(hi))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
