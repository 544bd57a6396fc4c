//! This library implements the [xoroshiro128+] pseudorandom number generator together with the
//! [SplitMix64] seed expander used to initialise it. One 64-bit seed, typically read from a clock,
//! is expanded into decorrelated state words; those words are loaded into a generator, which then
//! emits an endless stream of 64-bit outputs.
//!
//! Two generator forms are provided. [`Xoroshiro128Plus`] is the canonical single-lane generator.
//! [`Xoroshiro128PlusX4`] advances four independent lanes in lockstep for throughput, and is
//! exactly equivalent to four single-lane generators driven side by side.
//!
//! ```
//! use xoroseed::{splitmix64, Xoroshiro128Plus, Xoroshiro128PlusX4};
//!
//! let seed = 0x1234_5678;
//! let words = splitmix64::expand(seed, 2);
//! let mut rng = Xoroshiro128Plus::from_state(words[0], words[1]);
//! assert_eq!(rng, Xoroshiro128Plus::new(seed));
//!
//! let mut batched = Xoroshiro128PlusX4::new(seed);
//! let [a, b, c, d] = batched.advance();
//! # let _ = (rng.advance(), a, b, c, d);
//! ```
//!
//! These generators are **not** cryptographically secure, and a generator must not be shared
//! between threads; give each thread its own generator built from its own seed.
//!
//! The crate also carries the small utilities its demo programs are built from: allocation-free
//! decimal formatting in [`decimal`] and three population-count strategies in [`popcount`]. This
//! library is `no_std` and needs an allocator only for [`splitmix64::expand`].
//!
//! [xoroshiro128+]: https://prng.di.unimi.it/
//! [SplitMix64]: http://xoroshiro.di.unimi.it/splitmix64.c

#![no_std]
// Configuration attributes
#![warn(missing_docs)]
#![forbid(clippy::all)]
#![warn(clippy::nursery)]

extern crate alloc;

pub mod decimal;
pub mod popcount;
mod prelude;
pub mod splitmix64;
mod xoroshiro128p;
mod xoroshiro128p_x4;

pub use prelude::rotl64;
pub use xoroshiro128p::Xoroshiro128Plus;
pub use xoroshiro128p_x4::{Xoroshiro128PlusX4, LANES};
