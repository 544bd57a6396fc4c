//! Formats `u64` values as ASCII decimal and parses them back.
//!
//! Formatting never divides: quotients by ten come from [`div10`], a multiply by a fixed reciprocal.

use thiserror::Error;

/// Digits in `u64::MAX`, the longest decimal a `u64` can need.
pub const MAX_DIGITS: usize = 20;

/// ⌈2^67 / 10⌉. For every 64-bit `n`, `(n * RECIP_10) >> 67 == n / 10`.
const RECIP_10: u128 = 0xcccc_cccc_cccc_cccd;

/// Errors returned by [`parse_u64`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input held no bytes.
    #[error("cannot parse an integer from empty input")]
    Empty,
    /// A byte other than `b'0'..=b'9'` was found.
    #[error("invalid digit {byte:#04x} at position {position}")]
    InvalidDigit {
        /// Offset of the offending byte.
        position: usize,
        /// The offending byte.
        byte: u8,
    },
    /// The value is larger than `u64::MAX`.
    #[error("number too large to fit in a u64")]
    Overflow,
}

/// Divides by ten with a multiply and a shift.
///
/// ```
/// use xoroseed::decimal::div10;
///
/// assert_eq!(div10(99), 9);
/// assert_eq!(div10(u64::MAX), u64::MAX / 10);
/// ```
#[inline(always)]
pub const fn div10(n: u64) -> u64 {
    ((n as u128 * RECIP_10) >> 67) as u64
}

/// Writes the digits of `v` right-aligned into `buf` and returns the index of the first digit.
#[inline]
fn write_digits(mut v: u64, buf: &mut [u8]) -> usize {
    let mut pos = buf.len();
    loop {
        let q = div10(v);
        pos -= 1;
        buf[pos] = b'0' + (v - q * 10) as u8;
        v = q;
        if v == 0 {
            return pos;
        }
    }
}

/// Formats `v` as decimal digits without leading zeros, using `buf` as storage.
///
/// ```
/// use xoroseed::decimal::{format_u64, MAX_DIGITS};
///
/// let mut buf = [0; MAX_DIGITS];
/// assert_eq!(format_u64(0, &mut buf), "0");
/// assert_eq!(format_u64(u64::MAX, &mut buf), "18446744073709551615");
/// ```
pub fn format_u64(v: u64, buf: &mut [u8; MAX_DIGITS]) -> &str {
    let start = write_digits(v, buf);
    match core::str::from_utf8(&buf[start..]) {
        Ok(digits) => digits,
        // only ASCII digits were written
        Err(_) => unreachable!(),
    }
}

/// Formats `v` like [`format_u64`] followed by a `\n`, ready to hand to a byte sink.
///
/// ```
/// use xoroseed::decimal::{format_u64_line, MAX_DIGITS};
///
/// let mut buf = [0; MAX_DIGITS + 1];
/// assert_eq!(format_u64_line(1024, &mut buf), b"1024\n");
/// ```
pub fn format_u64_line(v: u64, buf: &mut [u8; MAX_DIGITS + 1]) -> &[u8] {
    buf[MAX_DIGITS] = b'\n';
    let start = write_digits(v, &mut buf[..MAX_DIGITS]);
    &buf[start..]
}

/// Parses ASCII decimal digits into a `u64`.
///
/// Leading zeros are accepted; signs, whitespace and any other byte are not.
///
/// ```
/// use xoroseed::decimal::{parse_u64, ParseError};
///
/// assert_eq!(parse_u64(b"007"), Ok(7));
/// assert_eq!(parse_u64(b""), Err(ParseError::Empty));
/// assert_eq!(parse_u64(b"18446744073709551616"), Err(ParseError::Overflow));
/// ```
pub fn parse_u64(digits: &[u8]) -> Result<u64, ParseError> {
    if digits.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut v: u64 = 0;
    for (position, &byte) in digits.iter().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(ParseError::InvalidDigit { position, byte });
        }
        v = v
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(byte - b'0')))
            .ok_or(ParseError::Overflow)?;
    }

    Ok(v)
}
