//! Three ways to count the set bits of a `u32`.
//!
//! All strategies return the same result for every input; they differ only in speed. See the
//! `popcount` bench and the `popcnt` tool for comparisons.

/// Counts set bits by clearing the lowest set bit until none remain. Runs one iteration per set
/// bit, so it is fast on sparse inputs and slowest on dense ones.
#[inline]
pub const fn popcount_sparse(mut x: u32) -> u32 {
    let mut total = 0;
    while x != 0 {
        total += 1;
        x &= x - 1;
    }
    total
}

/// Counts set bits with a branch-free divide and conquer: neighbouring fields are summed in
/// widths of 2, 4, 8, 16 and 32 bits.
#[inline]
pub const fn popcount_swar(x: u32) -> u32 {
    let x = (x & 0x5555_5555) + ((x >> 1) & 0x5555_5555);
    let x = (x & 0x3333_3333) + ((x >> 2) & 0x3333_3333);
    let x = (x & 0x0f0f_0f0f) + ((x >> 4) & 0x0f0f_0f0f);
    let x = (x & 0x00ff_00ff) + ((x >> 8) & 0x00ff_00ff);
    (x & 0x0000_ffff) + ((x >> 16) & 0x0000_ffff)
}

/// Counts set bits with [`u32::count_ones`], which lowers to the hardware instruction when the
/// target has one.
#[inline]
pub const fn popcount_native(x: u32) -> u32 {
    x.count_ones()
}

/// A popcount implementation, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`popcount_sparse`]
    Sparse,
    /// [`popcount_swar`]
    Swar,
    /// [`popcount_native`]
    Native,
}

impl Strategy {
    /// Every strategy, slowest first.
    pub const ALL: [Self; 3] = [Self::Sparse, Self::Swar, Self::Native];

    /// A short name for reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sparse => "sparse",
            Self::Swar => "swar",
            Self::Native => "native",
        }
    }

    /// Counts the set bits of `x`.
    #[inline]
    pub const fn count(self, x: u32) -> u32 {
        match self {
            Self::Sparse => popcount_sparse(x),
            Self::Swar => popcount_swar(x),
            Self::Native => popcount_native(x),
        }
    }
}
