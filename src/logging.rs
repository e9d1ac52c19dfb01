use std::io::IsTerminal;

use color_eyre::eyre::{Result, eyre};
use tracing::Level;

/// Picks the log level: each `-v` steps up from `warn`, otherwise the
/// configured level applies.
pub fn resolve_level(configured: &str, verbose: u8) -> Level {
    match verbose {
        0 => configured.parse().unwrap_or(Level::WARN),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout stays the report.
pub fn init(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))
}
