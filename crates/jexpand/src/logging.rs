//! Diagnostic logging setup

use std::io::IsTerminal;
use tracing_subscriber::filter::LevelFilter;

/// Install the stderr subscriber
///
/// Only warnings are shown unless `verbose` is set. Stdout is left untouched
/// so rewritten content can be piped.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    // A subscriber may already be installed when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
