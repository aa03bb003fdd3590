//! JSON log records
//!
//! Each emitted entry is one line of the form
//!
//! ```text
//! {"log":{"level":"info","message":"Hello World!","time":"2024-05-01 13:37:00 +0200 CEST"}}
//! ```

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::LogResult;
use crate::level::Level;

/// Timestamp layout: `YYYY-MM-DD hh:mm:ss ±ZZZZ ZONE`, e.g. `2024-05-01 13:37:00 +0200 CEST`
pub const TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S %z %Z";

/// Zone records are stamped in, resolved once
static LOCAL_ZONE: Lazy<Tz> = Lazy::new(local_zone);

/// `$TZ` if it names an IANA zone, then the system zone, then UTC
fn local_zone() -> Tz {
    std::env::var("TZ")
        .ok()
        .and_then(|name| name.trim_start_matches(':').parse::<Tz>().ok())
        .or_else(|| {
            iana_time_zone::get_timezone()
                .ok()
                .and_then(|name| name.parse::<Tz>().ok())
        })
        .unwrap_or(Tz::UTC)
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: String,
    pub message: String,
    pub time: String,
}

/// Root element wrapping the record under the `"log"` key
#[derive(Serialize, Deserialize)]
struct Envelope {
    log: LogRecord,
}

impl LogRecord {
    /// Create a record stamped with the current local time
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level: level.as_str().to_string(),
            message: message.into(),
            time: now(),
        }
    }

    /// Serialize into a single JSON line, without the line terminator
    pub fn to_json(&self) -> LogResult<Vec<u8>> {
        let envelope = EnvelopeRef { log: self };
        Ok(serde_json::to_vec(&envelope)?)
    }

    /// Parse one line previously produced by [`LogRecord::to_json`]
    pub fn parse_line(line: &str) -> LogResult<Self> {
        let envelope: Envelope = serde_json::from_str(line.trim_end())?;
        Ok(envelope.log)
    }

    /// Level of this record, if the name is a known one
    pub fn level(&self) -> Option<Level> {
        Level::ALL.into_iter().find(|l| l.as_str() == self.level)
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    log: &'a LogRecord,
}

/// Render `instant` in `zone` with [`TIME_LAYOUT`]
pub fn format_time(instant: DateTime<Utc>, zone: Tz) -> String {
    instant.with_timezone(&zone).format(TIME_LAYOUT).to_string()
}

/// Current local time rendered with [`TIME_LAYOUT`]
pub fn now() -> String {
    format_time(Utc::now(), *LOCAL_ZONE)
}

/// Format a raw level and message into a JSON line terminated by `\n`.
///
/// Fails for levels outside `1..=6` and when serialization fails; nothing
/// partial is returned in either case.
pub fn format_line(level: i64, message: &str) -> LogResult<Vec<u8>> {
    let level = Level::try_from(level)?;
    let mut line = LogRecord::new(level, message).to_json()?;
    line.push(b'\n');
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogError;
    use chrono::TimeZone;

    /// Parse a timestamp and check it renders back identically in the local zone
    fn assert_local_time(time: &str) {
        let (stamp, zone) = time.rsplit_once(' ').unwrap();
        assert!(!zone.is_empty() && !zone.contains(':'), "zone is not an abbreviation: {}", time);

        let parsed = DateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S %z").unwrap();
        assert_eq!(format_time(parsed.with_timezone(&Utc), *LOCAL_ZONE), time);
    }

    #[test]
    fn test_format_time_zone_abbreviations() {
        let summer = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

        assert_eq!(format_time(summer, Tz::UTC), "2024-07-01 12:00:00 +0000 UTC");
        assert_eq!(
            format_time(summer, chrono_tz::Europe::Berlin),
            "2024-07-01 14:00:00 +0200 CEST"
        );
        assert_eq!(
            format_time(winter, chrono_tz::Europe::Berlin),
            "2024-01-15 13:00:00 +0100 CET"
        );
        assert_eq!(
            format_time(winter, chrono_tz::America::Denver),
            "2024-01-15 05:00:00 -0700 MST"
        );
    }

    #[test]
    fn test_format_line_shape() {
        let line = format_line(Level::Info.as_i64(), "Hello World!").unwrap();
        let text = String::from_utf8(line).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.matches('\n').count(), 1);
        assert!(text.starts_with(r#"{"log":{"level":"info","message":"Hello World!","time":""#));
    }

    #[test]
    fn test_format_then_parse() {
        let line = format_line(3, "Hello World!").unwrap();
        let record = LogRecord::parse_line(std::str::from_utf8(&line).unwrap()).unwrap();
        assert_eq!(record.level, "info");
        assert_eq!(record.level(), Some(Level::Info));
        assert_eq!(record.message, "Hello World!");
        assert_local_time(&record.time);
    }

    #[test]
    fn test_message_escaping_stays_on_one_line() {
        let line = format_line(5, "a\nb \"quoted\"").unwrap();
        let text = String::from_utf8(line).unwrap();
        assert_eq!(text.matches('\n').count(), 1);
        let record = LogRecord::parse_line(&text).unwrap();
        assert_eq!(record.message, "a\nb \"quoted\"");
        assert_eq!(record.level, "error");
    }

    #[test]
    fn test_invalid_level() {
        assert!(matches!(format_line(0, "x"), Err(LogError::InvalidLevel(0))));
        assert!(matches!(format_line(7, "x"), Err(LogError::InvalidLevel(7))));
    }

    #[test]
    fn test_parse_line_rejects_garbage() {
        assert!(matches!(
            LogRecord::parse_line("INFO: not json"),
            Err(LogError::Serialization(_))
        ));
    }
}
