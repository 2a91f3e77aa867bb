//! Logger setup for the command-line tool

use log::LevelFilter;
use std::env;

/// Initialize `env_logger`
///
/// Diagnostics (skipped lines, unmatched patterns, dead ends) are warnings,
/// so the default level shows them. `debug_enabled` adds per-puzzle detail.
/// `RUST_LOG` overrides both.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (e.g. from tests) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
