//! Console Logger
//!
//! Installs `console_log` as the global `log` backend, with the level taken
//! from the page's client settings.

use std::str::FromStr;

use log::{Level, LevelFilter, SetLoggerError};

/// Install the browser console as the global `log` backend.
///
/// `LevelFilter::Off` still installs the backend but silences every record.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    console_log::init_with_level(backend_level(level))?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name (`"debug"`, `"WARN"`, ...) falling back to `Info`.
pub fn parse_level(name: Option<&str>) -> LevelFilter {
    name.and_then(|n| LevelFilter::from_str(n.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

/// `console_log` takes a concrete level; `Off` maps to the quietest one.
fn backend_level(level: LevelFilter) -> Level {
    level.to_level().unwrap_or(Level::Error)
}
