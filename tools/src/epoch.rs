//! Prints the current Unix time as a decimal line.

use anyhow::{Context, Result};
use clap::Parser;
use std::{
    io::{self, Write},
    process,
};
use xoroseed::decimal::{format_u64_line, MAX_DIGITS};
use xoroseed_tools::clock;

#[derive(Parser)]
#[command(name = "epoch")]
#[command(version, about = "Print the time since the Unix epoch")]
struct Cli {
    /// Print nanoseconds instead of seconds
    #[arg(long)]
    nanos: bool,
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
    let now = if cli.nanos {
        clock::epoch_nanos()?
    } else {
        clock::epoch_secs()?
    };

    let mut buf = [0; MAX_DIGITS + 1];
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(format_u64_line(now, &mut buf))
        .and_then(|()| stdout.flush())
        .context("failed to write to stdout")
}
