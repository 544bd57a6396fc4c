//! Writes generator output as decimal lines.

use std::{io, io::Write, iter};
use xoroseed::{
    decimal::{format_u64_line, MAX_DIGITS},
    Xoroshiro128Plus, Xoroshiro128PlusX4,
};

/// Which generator form produces the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lanes {
    /// One xoroshiro128+ stream.
    Single,
    /// Four streams advanced together, emitted step by step.
    Batched,
}

/// Writes each value as a decimal line.
pub fn write_values<W: Write>(out: &mut W, values: impl IntoIterator<Item = u64>) -> io::Result<()> {
    let mut buf = [0; MAX_DIGITS + 1];
    for v in values {
        out.write_all(format_u64_line(v, &mut buf))?;
    }
    Ok(())
}

/// Expands `seed` into a generator and writes its first `count` outputs.
pub fn write_random<W: Write>(out: &mut W, seed: u64, count: usize, lanes: Lanes) -> io::Result<()> {
    match lanes {
        Lanes::Single => write_values(out, Xoroshiro128Plus::new(seed).take(count)),
        Lanes::Batched => {
            let mut rng = Xoroshiro128PlusX4::new(seed);
            let values = iter::repeat_with(move || rng.advance()).flatten();
            write_values(out, values.take(count))
        }
    }
}

#[cfg(test)]
mod test {
    use super::{write_random, write_values, Lanes};
    use std::io::{self, Write};
    use xoroseed::{decimal::parse_u64, Xoroshiro128Plus, Xoroshiro128PlusX4};

    fn parse_lines(out: &[u8]) -> Vec<u64> {
        out.split(|&b| b == b'\n')
            .filter(|line| !line.is_empty())
            .map(|line| parse_u64(line).unwrap())
            .collect()
    }

    #[test]
    fn test_write_values() {
        let mut out = Vec::new();
        write_values(&mut out, [0, 7, u64::MAX]).unwrap();

        assert_eq!(out, b"0\n7\n18446744073709551615\n");
    }

    #[test]
    fn test_write_single() {
        let mut out = Vec::new();
        write_random(&mut out, 42, 100, Lanes::Single).unwrap();

        let expected: Vec<u64> = Xoroshiro128Plus::new(42).take(100).collect();
        assert_eq!(parse_lines(&out), expected);
    }

    #[test]
    fn test_write_batched() {
        let mut out = Vec::new();
        write_random(&mut out, 42, 10, Lanes::Batched).unwrap();

        let mut expected = [0; 10];
        Xoroshiro128PlusX4::new(42).fill(&mut expected);
        assert_eq!(parse_lines(&out), expected);
    }

    #[test]
    fn test_write_nothing() {
        let mut out = Vec::new();
        write_random(&mut out, 1, 0, Lanes::Batched).unwrap();

        assert!(out.is_empty());
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_errors_propagate() {
        let err = write_random(&mut Broken, 1, 4, Lanes::Single).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
