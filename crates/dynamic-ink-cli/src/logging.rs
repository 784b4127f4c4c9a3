//! Logging setup.

use anyhow::Result;
use tracing::{debug, subscriber, Level};
use tracing_subscriber::FmtSubscriber;

/// Maps the number of `-v` flags to a maximum level.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a compact fmt subscriber writing to stderr.
///
/// Stdout is reserved for command output.
pub fn setup(verbosity: u8) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity > 2)
        .compact()
        .finish();

    subscriber::set_global_default(subscriber)?;
    debug!(verbosity, "logging set up");
    Ok(())
}
