//! Log levels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LogError;

/// Log levels, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    Trace = 1,
    Debug = 2,
    #[default]
    Info = 3,
    Warn = 4,
    Error = 5,
    Fatal = 6,
}

impl Level {
    /// Lowest level
    pub const MIN: Level = Level::Trace;
    /// Highest level
    pub const MAX: Level = Level::Fatal;

    /// All levels in ascending order
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Canonical lowercase name used in serialized records
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    /// Numeric value in `1..=6`
    pub fn as_i64(&self) -> i64 {
        *self as i64
    }

    /// Map an arbitrary integer onto the nearest valid level.
    ///
    /// Returns the clamped level and whether the input was out of range.
    pub fn clamp(value: i64) -> (Level, bool) {
        match Level::try_from(value) {
            Ok(level) => (level, false),
            Err(_) if value < Level::MIN.as_i64() => (Level::MIN, true),
            Err(_) => (Level::MAX, true),
        }
    }
}

impl TryFrom<i64> for Level {
    type Error = LogError;

    fn try_from(value: i64) -> Result<Self, LogError> {
        match value {
            1 => Ok(Level::Trace),
            2 => Ok(Level::Debug),
            3 => Ok(Level::Info),
            4 => Ok(Level::Warn),
            5 => Ok(Level::Error),
            6 => Ok(Level::Fatal),
            other => Err(LogError::InvalidLevel(other)),
        }
    }
}

impl From<Level> for i64 {
    fn from(level: Level) -> Self {
        level.as_i64()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    /// Accepts the canonical names (any case) or the numbers `1..=6`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Level::try_from(value);
        }
        match trimmed.to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(LogError::Config(format!("unknown log level: {}", s))),
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Level::try_from(n).map_err(serde::de::Error::custom),
            Raw::Name(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
