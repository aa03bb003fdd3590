//! Process-wide default logger
//!
//! Startup code should build a [`Logger`], configure it and hand it to
//! [`install_default`]. [`default_logger`] returns that instance from
//! anywhere in the process; if nothing was installed, the first call
//! creates one with [`Logger::from_env`].
//!
//! The default logger is shared mutable state: reconfiguring it from one
//! component affects every other component logging through it. Prefer
//! passing a `&dyn Log` or `Arc<dyn Log>` to components that can take one.

use once_cell::sync::OnceCell;

use super::logger::Logger;

/// Global logger instance
static DEFAULT_LOGGER: OnceCell<Logger> = OnceCell::new();

/// Install `logger` as the process-wide default.
///
/// Fails and hands the logger back if a default already exists, either
/// installed earlier or created by a previous [`default_logger`] call.
pub fn install_default(logger: Logger) -> Result<&'static Logger, Logger> {
    DEFAULT_LOGGER.set(logger)?;
    Ok(default_logger())
}

/// The process-wide default logger
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::from_env)
}
