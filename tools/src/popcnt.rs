//! Compares the popcount strategies on the same input pattern.

use anyhow::{Context, Result};
use clap::Parser;
use std::{
    io::{self, Write},
    process,
};
use xoroseed::popcount::Strategy;
use xoroseed_tools::timing::{self, DEFAULT_ITERATIONS};

#[derive(Parser)]
#[command(name = "popcnt")]
#[command(version, about = "Time three popcount strategies")]
struct Cli {
    /// Inputs counted per strategy
    #[arg(long, short = 'n', default_value_t = DEFAULT_ITERATIONS)]
    iterations: u64,
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
    tracing::debug!(iterations = cli.iterations, "timing popcount strategies");

    let mut stdout = io::stdout().lock();
    for strategy in Strategy::ALL {
        let t = timing::time_strategy(strategy, cli.iterations);
        tracing::debug!(strategy = strategy.name(), sink = t.sink, "finished");

        writeln!(stdout, "{}: time = {:.2} ms", strategy.name(), t.millis())
            .context("failed to write to stdout")?;
    }

    Ok(())
}
