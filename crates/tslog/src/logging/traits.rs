//! Log trait definition

use std::sync::Arc;

use crate::error::LogResult;
use crate::level::Level;

/// Leveled logging abstraction
///
/// Implementors only provide [`Log::log`]; the leveled entry points are
/// built on top of it. Components should take a `&dyn Log` or a
/// [`SharedLog`] instead of reaching for the process-wide default logger.
///
/// `error` and `fatal` take an error value and log its `Display` text.
/// `fatal` is a severity only, it never stops the process.
pub trait Log: Send + Sync {
    /// Log `message` at `level`
    ///
    /// Messages below the logger's threshold are dropped and are not an error.
    fn log(&self, level: Level, message: &str) -> LogResult<()>;

    /// Log a trace message
    fn trace(&self, message: &str) -> LogResult<()> {
        self.log(Level::Trace, message)
    }

    /// Log a debug message
    fn debug(&self, message: &str) -> LogResult<()> {
        self.log(Level::Debug, message)
    }

    /// Log an info message
    fn info(&self, message: &str) -> LogResult<()> {
        self.log(Level::Info, message)
    }

    /// Log a warning message
    fn warn(&self, message: &str) -> LogResult<()> {
        self.log(Level::Warn, message)
    }

    /// Log an error
    fn error(&self, err: &dyn std::error::Error) -> LogResult<()> {
        self.log(Level::Error, &err.to_string())
    }

    /// Log an error at fatal level
    fn fatal(&self, err: &dyn std::error::Error) -> LogResult<()> {
        self.log(Level::Fatal, &err.to_string())
    }
}

/// Type alias for an Arc-wrapped logger
pub type SharedLog = Arc<dyn Log>;

/// Extension trait for logging with format arguments
pub trait LogExt: Log {
    /// Log a trace message with format arguments
    fn trace_fmt(&self, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.trace(&args.to_string())
    }

    /// Log a debug message with format arguments
    fn debug_fmt(&self, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.debug(&args.to_string())
    }

    /// Log an info message with format arguments
    fn info_fmt(&self, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.info(&args.to_string())
    }

    /// Log a warning message with format arguments
    fn warn_fmt(&self, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.warn(&args.to_string())
    }
}

// Implement LogExt for all Log implementations
impl<T: Log + ?Sized> LogExt for T {}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(&format!($($arg)*))
    };
}
