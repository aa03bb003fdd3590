//! Level-gated JSON logger

use parking_lot::Mutex;

use crate::config::{self, LoggerConfig};
use crate::error::{LogError, LogResult};
use crate::level::Level;
use crate::output::{Destination, OutputResolver, OutputTarget, Sink};
use crate::record;

use super::traits::Log;

/// Threshold and sink, always read and replaced together
#[derive(Debug)]
struct LoggerState {
    min_level: Level,
    sink: Sink,
}

/// A logger writing one JSON record per line to a configurable sink
///
/// A new logger logs `info` and above to standard output. Change the
/// threshold with [`Logger::set_level`] and the destination with
/// [`Logger::set_output`].
///
/// # Thread Safety
///
/// Every call holds an internal lock for its state access and its write, so
/// concurrent callers never see a half-applied reconfiguration and records
/// from different threads never interleave within a line.
///
/// # Example
///
/// ```
/// use tslog::{Log, Logger};
///
/// let logger = Logger::new();
/// logger.set_level(4).unwrap();
/// logger.set_output("discard").unwrap();
/// logger.info("dropped: below warn").unwrap();
/// logger.warn("written, but discarded").unwrap();
/// ```
#[derive(Debug)]
pub struct Logger {
    state: Mutex<LoggerState>,
    resolver: OutputResolver,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a logger with threshold `info` writing to standard output
    pub fn new() -> Self {
        Self::with_resolver(OutputResolver::default())
    }

    /// Create a logger that opens its outputs through `resolver`
    pub fn with_resolver(resolver: OutputResolver) -> Self {
        Self {
            state: Mutex::new(LoggerState {
                min_level: Level::default(),
                sink: Sink::Stdout,
            }),
            resolver,
        }
    }

    /// Create a logger configured from `TS_LOGFILE` and `TS_LOGLEVEL`
    ///
    /// Problems with either variable are reported as `warn` records through
    /// the new logger, which then writes to standard output.
    pub fn from_env() -> Self {
        let logger = Self::new();
        logger.reset_from_env();
        logger
    }

    /// Create a logger from a configuration
    pub fn from_config(config: &LoggerConfig) -> LogResult<Self> {
        let logger = Self::new();
        config.apply(&logger)?;
        Ok(logger)
    }

    /// Re-read `TS_LOGFILE` and `TS_LOGLEVEL` and apply them to this logger
    pub fn reset_from_env(&self) {
        config::apply_env(self, |key| std::env::var(key).ok());
    }

    /// Set the minimum level from its number.
    ///
    /// Values below 1 set the threshold to `trace`, values above 6 set it to
    /// `fatal`; both still return [`LogError::InvalidLevel`].
    pub fn set_level(&self, level: i64) -> LogResult<()> {
        let (clamped, out_of_range) = Level::clamp(level);
        self.set_min_level(clamped);
        if out_of_range {
            return Err(LogError::InvalidLevel(level));
        }
        Ok(())
    }

    /// Set the minimum level
    pub fn set_min_level(&self, level: Level) {
        self.state.lock().min_level = level;
    }

    /// Current minimum level
    pub fn level(&self) -> Level {
        self.state.lock().min_level
    }

    /// Where records currently go
    pub fn destination(&self) -> Destination {
        self.state.lock().sink.destination()
    }

    /// Route output to `target`.
    ///
    /// Special targets are `stdout`, `discard` and `tmp` (a new `tslog_*`
    /// file in the temp directory); anything else is a file that records
    /// are appended to. The previous sink is closed either way. On error
    /// the logger writes to standard output.
    pub fn set_output(&self, target: impl Into<OutputTarget>) -> LogResult<()> {
        let target = target.into();
        let mut state = self.state.lock();

        let (sink, result) = match self.resolver.resolve(&target) {
            Ok(sink) => (sink, Ok(())),
            Err(e) => (Sink::Stdout, Err(e)),
        };
        let previous = std::mem::replace(&mut state.sink, sink);
        previous.close();

        result
    }

    /// Write `message` if `level` passes the threshold.
    ///
    /// Sink write failures are ignored; formatting failures are returned and
    /// nothing is written.
    fn try_log(&self, level: i64, message: &str) -> LogResult<()> {
        let mut state = self.state.lock();
        if level < state.min_level.as_i64() {
            return Ok(());
        }
        let line = record::format_line(level, message)?;
        state.sink.write_line(&line);
        Ok(())
    }
}

impl Log for Logger {
    fn log(&self, level: Level, message: &str) -> LogResult<()> {
        self.try_log(level.as_i64(), message)
    }
}
