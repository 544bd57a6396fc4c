//! Prints pseudorandom 64-bit values, one decimal per line.
//!
//! The seed defaults to the wall clock in nanoseconds; pass `--seed` to replay a stream.

use anyhow::{Context, Result};
use clap::Parser;
use std::{
    io::{self, BufWriter, Write},
    process,
};
use xoroseed::decimal::parse_u64;
use xoroseed_tools::{
    clock,
    output::{self, Lanes},
};

#[derive(Parser)]
#[command(name = "seedgen")]
#[command(version, about = "Expand a seed with SplitMix64 and print xoroshiro128+ output")]
struct Cli {
    /// Seed to expand (decimal); defaults to nanoseconds since the Unix epoch
    #[arg(long, short, value_parser = |s: &str| parse_u64(s.as_bytes()))]
    seed: Option<u64>,

    /// Number of values to print
    #[arg(long, short = 'n', default_value_t = 4)]
    count: usize,

    /// Use a single xoroshiro128+ lane instead of four batched lanes
    #[arg(long)]
    single: bool,
}

fn main() {
    xoroseed_tools::init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let seed = match cli.seed {
        Some(seed) => seed,
        None => clock::epoch_nanos().context("failed to read a seed from the clock")?,
    };
    let lanes = if cli.single { Lanes::Single } else { Lanes::Batched };

    tracing::debug!(seed, count = cli.count, ?lanes, "generating");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    output::write_random(&mut out, seed, cli.count, lanes).context("failed to write values")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
