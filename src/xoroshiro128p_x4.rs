//! Implements a 4-lane batched xoroshiro128+ generator.

use crate::{splitmix64::expand8, xoroshiro128p::step, Xoroshiro128Plus};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "bincode")]
use bincode::{Decode, Encode};

/// Number of independent streams advanced together.
pub const LANES: usize = 4;

/// Four independent [`Xoroshiro128Plus`] streams advanced in lockstep.
///
/// Lanes never interact: advancing an `Xoroshiro128PlusX4` is exactly equivalent to advancing four
/// separate single-lane generators once each. State is laid out lane-parallel (`s0[0..4]`,
/// `s1[0..4]`) so the per-step loop can be vectorized by the compiler.
///
/// ```
/// use xoroseed::{Xoroshiro128Plus, Xoroshiro128PlusX4};
///
/// let mut batched = Xoroshiro128PlusX4::new(0xfeed);
/// let mut lanes = batched.clone().into_lanes();
///
/// for _ in 0..1_000 {
///     let out = batched.advance();
///     for (lane, x) in lanes.iter_mut().zip(out) {
///         assert_eq!(lane.advance(), x);
///     }
/// }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bincode", derive(Encode, Decode))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro128PlusX4 {
    s0: [u64; LANES],
    s1: [u64; LANES],
}

impl Xoroshiro128PlusX4 {
    /// Creates a generator from the eight words of [`expand8`]`(seed)`. Lane `i` takes
    /// `s0 = words[i]` and `s1 = words[4 + i]`.
    pub fn new(seed: u64) -> Self {
        let words = expand8(seed);

        let mut s0 = [0; LANES];
        let mut s1 = [0; LANES];
        s0.copy_from_slice(&words[..LANES]);
        s1.copy_from_slice(&words[LANES..]);

        Self { s0, s1 }
    }

    /// Creates a generator from raw lane-parallel state. No lane may be `(0, 0)`; this is not
    /// checked.
    pub const fn from_state(s0: [u64; LANES], s1: [u64; LANES]) -> Self {
        Self { s0, s1 }
    }

    /// Gathers four single-lane generators into one batched generator.
    pub fn from_lanes(lanes: [Xoroshiro128Plus; LANES]) -> Self {
        let mut s0 = [0; LANES];
        let mut s1 = [0; LANES];
        for (i, lane) in lanes.iter().enumerate() {
            (s0[i], s1[i]) = lane.state();
        }

        Self { s0, s1 }
    }

    /// Returns the current state of lane `i` as a standalone generator.
    ///
    /// # Panics
    ///
    /// Panics if `i >= LANES`.
    pub const fn lane(&self, i: usize) -> Xoroshiro128Plus {
        Xoroshiro128Plus::from_state(self.s0[i], self.s1[i])
    }

    /// Splits the generator into its four lanes.
    pub const fn into_lanes(self) -> [Xoroshiro128Plus; LANES] {
        [self.lane(0), self.lane(1), self.lane(2), self.lane(3)]
    }

    /// Returns the lane-parallel state words `(s0, s1)`.
    pub const fn state(&self) -> ([u64; LANES], [u64; LANES]) {
        (self.s0, self.s1)
    }

    /// Advances every lane by one step and returns one output per lane.
    #[inline]
    pub fn advance(&mut self) -> [u64; LANES] {
        let mut out = [0; LANES];
        for ((x, s0), s1) in out.iter_mut().zip(&mut self.s0).zip(&mut self.s1) {
            *x = step(s0, s1);
        }
        out
    }

    /// Fills `out` step by step: `out[4 * k + i]` is the `k`-th output of lane `i`.
    ///
    /// If `out.len()` is not a multiple of four, the last step is taken in full and the outputs of
    /// the lanes that do not fit are dropped.
    pub fn fill(&mut self, out: &mut [u64]) {
        let mut chunks = out.chunks_exact_mut(LANES);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.advance());
        }

        let rest = chunks.into_remainder();
        if !rest.is_empty() {
            let last = self.advance();
            rest.copy_from_slice(&last[..rest.len()]);
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Xoroshiro128PlusX4, LANES};
    use crate::{prelude::all_distinct, splitmix64::expand8, Xoroshiro128Plus};
    use alloc::vec::Vec;
    use rand::Rng;

    #[test]
    fn test_new_layout() {
        let words = expand8(31337);
        let rng = Xoroshiro128PlusX4::new(31337);

        for i in 0..LANES {
            assert_eq!(rng.lane(i).state(), (words[i], words[LANES + i]));
        }
    }

    #[test]
    fn test_golden_first_step() {
        let mut rng = Xoroshiro128PlusX4::new(0);
        assert_eq!(
            rng.advance(),
            [
                0x0351_1cc4_25e5_d017,
                0x1fb5_37c9_b879_52cd,
                0xef55_f08e_d490_6f25,
                0x2aeb_e685_ff21_64c0,
            ]
        );
    }

    #[test]
    fn test_lane_independence() {
        const STEPS: usize = 1_000;
        let mut rng = rand::thread_rng();

        for _ in 0..20 {
            let mut batched = Xoroshiro128PlusX4::new(rng.gen());
            let mut lanes = [0, 1, 2, 3].map(|i| batched.lane(i));

            for _ in 0..STEPS {
                let out = batched.advance();
                for (x, lane) in out.into_iter().zip(lanes.iter_mut()) {
                    assert_eq!(x, lane.advance());
                }
            }

            assert_eq!(batched.into_lanes(), lanes);
        }
    }

    #[test]
    fn test_from_lanes() {
        let lanes = [
            Xoroshiro128Plus::new(1),
            Xoroshiro128Plus::new(2),
            Xoroshiro128Plus::from_state(1, 2),
            Xoroshiro128Plus::from_state(u64::MAX, u64::MAX),
        ];
        let rng = Xoroshiro128PlusX4::from_lanes(lanes.clone());

        assert_eq!(rng.into_lanes(), lanes);
    }

    #[test]
    fn test_lanes_differ() {
        let mut rng = Xoroshiro128PlusX4::new(rand::thread_rng().gen());
        let mut outputs = Vec::new();
        for _ in 0..1_000 {
            outputs.extend(rng.advance());
        }

        assert!(all_distinct(outputs));
    }

    #[test]
    fn test_fill_interleaves_steps() {
        let mut a = Xoroshiro128PlusX4::new(8);
        let mut b = a.clone();

        let mut buf = [0; 10];
        a.fill(&mut buf);

        let first = b.advance();
        let second = b.advance();
        let third = b.advance();
        assert_eq!(buf[..4], first);
        assert_eq!(buf[4..8], second);
        assert_eq!(buf[8..], third[..2]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_state_round_trip() {
        let rng = Xoroshiro128PlusX4::new(17);
        let (s0, s1) = rng.state();

        assert_eq!(Xoroshiro128PlusX4::from_state(s0, s1), rng);
    }
}
