//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring a logger or formatting a record
#[derive(Error, Debug)]
pub enum LogError {
    /// Level outside `1..=6`
    #[error("invalid level: log level {0} does not exist")]
    InvalidLevel(i64),

    /// Output target failed path validation
    #[error("check failed: {target:?}: {reason}")]
    TargetCheckFailed { target: String, reason: String },

    /// Temporary log file could not be created
    #[error("operation failed: create temp file {pattern}: {source}")]
    ResourceCreationFailed {
        pattern: String,
        #[source]
        source: std::io::Error,
    },

    /// Named log file could not be opened for appending
    #[error("operation failed: open file {}: {source}", .path.display())]
    ResourceOpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record could not be serialized
    #[error("operation failed: JSON serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error while reading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogError {
    /// Create a target check error
    pub fn check_failed(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TargetCheckFailed {
            target: target.into(),
            reason: reason.into(),
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;
