//! Wall-clock readings used as seeds and by the `epoch` tool.

use anyhow::{Context, Result};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn since_epoch() -> Result<Duration> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is set before the Unix epoch")
}

/// Nanoseconds since the Unix epoch.
pub fn epoch_nanos() -> Result<u64> {
    let nanos = since_epoch()?.as_nanos();
    u64::try_from(nanos).context("nanoseconds since the Unix epoch do not fit in 64 bits")
}

/// Whole seconds since the Unix epoch.
pub fn epoch_secs() -> Result<u64> {
    Ok(since_epoch()?.as_secs())
}
