//! Tracing setup for the `cinescore` binary.
//!
//! The library only emits `tracing` events (and `log` records from the
//! config loader); installing a subscriber is left to the binary.
//!
//! Verbosity maps onto a default filter for this crate:
//!
//! | `-v` count | level   |
//! |------------|---------|
//! | 0          | `warn`  |
//! | 1          | `info`  |
//! | 2          | `debug` |
//! | 3+         | `trace` |
//!
//! `RUST_LOG` takes precedence when set.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a verbosity count.
pub fn filter_for_verbosity(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("cinescore={level}")
}

/// Install the global subscriber. Log records from the `log` facade are
/// forwarded into tracing. Output goes to stderr so reports on stdout stay clean.
pub fn init_tracing(verbosity: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
