// src/logging.rs

//! Logger configuration for the scount driver.
//!
//! All diagnostics go through the `log` facade. The driver owns the only
//! environment lookup: `RECKON_DEBUG` is read once per process and raises
//! the filter to trace level, which also enables the per-node dump of the
//! tree walker in the core library.

use std::io::Write as _;

use log::LevelFilter;

/// The environment variable controlling debug tracing.
///
/// A value of "1" enables trace logging, "0" disables it. Any other value
/// is reported and treated as disabled.
pub const ENV_VAR_DEBUG: &str = "RECKON_DEBUG";

pub fn init(verbose: bool) {
    let mut level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let mut invalid_value = None;
    match std::env::var(ENV_VAR_DEBUG) {
        Ok(value) if value == "1" => level = LevelFilter::Trace,
        Ok(value) if value == "0" => {}
        Ok(value) => invalid_value = Some(value),
        Err(_) => {}
    }
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| match record.level() {
            log::Level::Warn => writeln!(buf, "Warning: {}", record.args()),
            log::Level::Trace => writeln!(buf, "[DEBUG] {}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        })
        .init();
    if let Some(value) = invalid_value {
        log::warn!(
            "Invalid value for environment variable '{ENV_VAR_DEBUG}'. \
             Expected \"0\" or \"1\" but found \"{value}\". Disabling debug logging."
        );
    }
}
