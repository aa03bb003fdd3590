//! tslog
//!
//! Leveled logging that writes one JSON record per line:
//!
//! ```text
//! {"log":{"level":"info","message":"Hello World!","time":"2024-05-01 13:37:00 +0200 CEST"}}
//! ```
//!
//! ## Levels
//!
//! `trace` (1) < `debug` (2) < `info` (3) < `warn` (4) < `error` (5) < `fatal` (6).
//! A logger writes records at or above its minimum level and silently drops
//! the rest. `fatal` is only a severity; it never ends the process.
//!
//! ## Outputs
//!
//! - `stdout`: standard output (default)
//! - `discard`: drop everything
//! - `tmp`: a new `tslog_*` file in the temp directory
//! - anything else: a file that records are appended to
//!
//! If an output cannot be opened the logger falls back to standard output
//! and the error is returned.
//!
//! ```rust,no_run
//! use tslog::{Log, Logger};
//!
//! let logger = Logger::new();
//! logger.set_level(2)?;
//! logger.set_output("/var/log/app.log")?;
//! logger.debug("starting")?;
//!
//! let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
//! logger.error(&err)?;
//! # Ok::<(), tslog::LogError>(())
//! ```
//!
//! The process-wide logger from [`default_logger`] is configured from the
//! `TS_LOGFILE` and `TS_LOGLEVEL` environment variables unless startup code
//! installs its own with [`install_default`].

pub mod error;
pub mod level;
pub mod record;
pub mod output;
pub mod logging;
pub mod config;

// Re-export commonly used types
pub use error::{LogError, LogResult};
pub use level::Level;
pub use record::LogRecord;
pub use output::{Destination, OutputResolver, OutputTarget, Sink};
pub use logging::{default_logger, install_default, Log, LogExt, Logger, SharedLog};
pub use config::LoggerConfig;
