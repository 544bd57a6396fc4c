//! Bit helpers shared by the generators.

/// Rotate left.
///
/// `k` is taken modulo 64, so every rotation amount is valid and `rotl64(x, 0) == x`.
///
/// ```
/// use xoroseed::rotl64;
///
/// let x = 0x0123_4567_89ab_cdef;
/// assert_eq!(rotl64(rotl64(x, 55), 9), x);
/// ```
#[inline(always)]
pub const fn rotl64(x: u64, k: u32) -> u64 {
    (x << (k & 63)) | (x >> (k.wrapping_neg() & 63))
}

/// Checks if a collection of values has all distinct values.
#[cfg(test)]
pub fn all_distinct(values: impl IntoIterator<Item = u64>) -> bool {
    let mut s = alloc::collections::BTreeSet::new();
    values.into_iter().all(move |x| s.insert(x))
}
