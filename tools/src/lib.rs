//! Shared plumbing for the demo programs: clock access, output, logging and the popcount timing
//! harness.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod clock;
pub mod output;
pub mod timing;

/// Installs a `tracing` subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`, so stdout carries only program output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
