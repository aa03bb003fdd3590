//! Logger configuration
//!
//! A logger can be configured from code, from a YAML file
//! (`~/.config/tslog/config.yaml` by default) or from the environment:
//!
//! - `TS_LOGFILE`: `stdout`, `discard`, `tmp` or a file name
//! - `TS_LOGLEVEL`: a level name (`trace` .. `fatal`) or number (`1` .. `6`)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LogError, LogResult};
use crate::level::Level;
use crate::logging::{Log, Logger};
use crate::output::STDOUT_TARGET;

/// Environment variable selecting the output target
pub const LOGFILE_ENV: &str = "TS_LOGFILE";
/// Environment variable selecting the minimum level
pub const LOGLEVEL_ENV: &str = "TS_LOGLEVEL";

/// Logger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Minimum level
    #[serde(default)]
    pub level: Level,

    /// Output target, with the same meaning as `Logger::set_output`
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_output() -> String {
    STDOUT_TARGET.to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            output: default_output(),
        }
    }
}

impl LoggerConfig {
    /// Default config file location (`<config dir>/tslog/config.yaml`)
    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("tslog").join("config.yaml")
    }

    /// Load settings from a YAML file
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(yaml: &str) -> LogResult<Self> {
        serde_yaml::from_str(yaml).map_err(|e| LogError::Config(format!("Failed to parse YAML: {}", e)))
    }

    /// Read settings from `TS_LOGFILE` and `TS_LOGLEVEL`.
    ///
    /// Unset or empty variables keep their defaults; an unknown level is an
    /// error.
    pub fn from_env() -> LogResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> LogResult<Self> {
        let mut config = Self::default();
        if let Some(output) = lookup(LOGFILE_ENV).filter(|v| !v.is_empty()) {
            config.output = output;
        }
        if let Some(level) = lookup(LOGLEVEL_ENV).filter(|v| !v.is_empty()) {
            config.level = level.parse()?;
        }
        Ok(config)
    }

    /// Apply level then output to `logger`.
    ///
    /// The level is always applied; a failing output leaves the logger
    /// writing to standard output and its error is returned.
    pub fn apply(&self, logger: &Logger) -> LogResult<()> {
        logger.set_min_level(self.level);
        logger.set_output(self.output.as_str())
    }
}

/// Configure `logger` from environment lookups, reporting problems through it.
///
/// Output is applied first so that warnings about the level land in the
/// configured destination.
pub(crate) fn apply_env(logger: &Logger, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(warning) = apply_env_output(logger, &lookup) {
        let _ = logger.warn(&warning);
    }

    match lookup(LOGLEVEL_ENV).filter(|v| !v.is_empty()).map(|v| v.parse::<Level>()) {
        Some(Ok(level)) => logger.set_min_level(level),
        Some(Err(e)) => {
            let _ = logger.warn(&format!("{}; keeping level {}", e, logger.level()));
        }
        None => {}
    }
}

/// Route `logger` to `TS_LOGFILE`.
///
/// Returns the warning to report when the logger ended up on standard output
/// because the variable is unset, empty or names an unusable target.
fn apply_env_output(logger: &Logger, lookup: &impl Fn(&str) -> Option<String>) -> Option<String> {
    let problem = match lookup(LOGFILE_ENV) {
        None => Some(format!("env variable ${} not set", LOGFILE_ENV)),
        Some(target) if target.is_empty() => Some(format!("empty name in ${}", LOGFILE_ENV)),
        Some(target) => logger.set_output(target).err().map(|e| e.to_string()),
    };
    problem.map(|problem| {
        let _ = logger.set_output(STDOUT_TARGET);
        format!("{}; switching log to stdout", problem)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{Destination, OutputResolver, DEFAULT_TMP_PREFIX};
    use crate::record::LogRecord;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, Level::Info);
        assert_eq!(config.output, "stdout");
        assert!(LoggerConfig::user_path().ends_with("tslog/config.yaml"));
    }

    #[test]
    fn test_from_yaml() {
        let config = LoggerConfig::from_yaml("level: warn\noutput: discard\n").unwrap();
        assert_eq!(config.level, Level::Warn);
        assert_eq!(config.output, "discard");

        let config = LoggerConfig::from_yaml("level: 2\n").unwrap();
        assert_eq!(config.level, Level::Debug);
        assert_eq!(config.output, "stdout");

        assert!(matches!(LoggerConfig::from_yaml("level: 9\n"), Err(LogError::Config(_))));
    }

    #[test]
    fn test_load_and_apply() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let log_path = dir.path().join("app.log");
        fs::write(
            &config_path,
            format!("level: error\noutput: {}\n", log_path.display()),
        )
        .unwrap();

        let config = LoggerConfig::load(&config_path).unwrap();
        let logger = Logger::from_config(&config).unwrap();
        assert_eq!(logger.level(), Level::Error);
        assert_eq!(logger.destination(), Destination::File(log_path));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LoggerConfig::load(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, LogError::Io(_)));
    }

    #[test]
    fn test_apply_bad_output_keeps_level() {
        let logger = Logger::new();
        let config = LoggerConfig {
            level: Level::Debug,
            output: String::new(),
        };
        assert!(config.apply(&logger).is_err());
        assert_eq!(logger.level(), Level::Debug);
        assert_eq!(logger.destination(), Destination::Stdout);
    }

    #[test]
    fn test_from_lookup() {
        let config = LoggerConfig::from_lookup(lookup(&[("TS_LOGFILE", "tmp"), ("TS_LOGLEVEL", "fatal")])).unwrap();
        assert_eq!(config.output, "tmp");
        assert_eq!(config.level, Level::Fatal);

        let config = LoggerConfig::from_lookup(lookup(&[("TS_LOGFILE", "")])).unwrap();
        assert_eq!(config, LoggerConfig::default());

        assert!(LoggerConfig::from_lookup(lookup(&[("TS_LOGLEVEL", "loud")])).is_err());
    }

    #[test]
    fn test_env_unset_or_empty_uses_stdout() {
        let logger = Logger::new();
        logger.set_output("discard").unwrap();
        apply_env(&logger, lookup(&[]));
        assert_eq!(logger.destination(), Destination::Stdout);

        logger.set_output("discard").unwrap();
        apply_env(&logger, lookup(&[("TS_LOGFILE", "")]));
        assert_eq!(logger.destination(), Destination::Stdout);
    }

    #[test]
    fn test_env_directory_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let target = format!("{}/", dir.path().display());
        let logger = Logger::new();

        apply_env(&logger, lookup(&[("TS_LOGFILE", target.as_str())]));
        assert_eq!(logger.destination(), Destination::Stdout);
    }

    #[test]
    fn test_env_fallback_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let logger = Logger::new();

        let warning = apply_env_output(&logger, &lookup(&[]));
        assert_eq!(
            warning.as_deref(),
            Some("env variable $TS_LOGFILE not set; switching log to stdout")
        );

        logger.set_output("discard").unwrap();
        let warning = apply_env_output(&logger, &lookup(&[("TS_LOGFILE", "")]));
        assert_eq!(warning.as_deref(), Some("empty name in $TS_LOGFILE; switching log to stdout"));
        assert_eq!(logger.destination(), Destination::Stdout);

        let target = dir.path().to_string_lossy().into_owned();
        let warning = apply_env_output(&logger, &lookup(&[("TS_LOGFILE", target.as_str())])).unwrap();
        assert!(warning.starts_with("check failed"), "unexpected warning {}", warning);
        assert!(warning.ends_with("; switching log to stdout"));

        let missing = dir.path().join("missing").join("app.log");
        let missing = missing.to_string_lossy().into_owned();
        let warning = apply_env_output(&logger, &lookup(&[("TS_LOGFILE", missing.as_str())])).unwrap();
        assert!(warning.starts_with("operation failed: open file"), "unexpected warning {}", warning);

        assert_eq!(apply_env_output(&logger, &lookup(&[("TS_LOGFILE", "discard")])), None);
        assert_eq!(logger.destination(), Destination::Discard);
    }

    #[test]
    fn test_env_tmp_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let logger = Logger::with_resolver(OutputResolver::new().with_temp_dir(dir.path()));

        apply_env(&logger, lookup(&[("TS_LOGFILE", "tmp")]));
        logger.info("into the temp file").unwrap();

        let path = match logger.destination() {
            Destination::File(path) => path,
            other => panic!("expected a temp file, got {:?}", other),
        };
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(DEFAULT_TMP_PREFIX), "unexpected name {}", name);
        assert_eq!(path.parent().unwrap(), dir.path());

        let text = fs::read_to_string(&path).unwrap();
        let record = LogRecord::parse_line(text.lines().next().unwrap()).unwrap();
        assert_eq!(record.message, "into the temp file");
    }

    #[test]
    fn test_env_file_and_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env.log");
        let path_str = path.to_string_lossy().into_owned();
        let logger = Logger::new();

        apply_env(&logger, lookup(&[("TS_LOGFILE", path_str.as_str()), ("TS_LOGLEVEL", "2")]));
        assert_eq!(logger.destination(), Destination::File(path.clone()));
        assert_eq!(logger.level(), Level::Debug);
    }

    #[test]
    fn test_env_bad_level_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env.log");
        let path_str = path.to_string_lossy().into_owned();
        let logger = Logger::new();

        apply_env(&logger, lookup(&[("TS_LOGFILE", path_str.as_str()), ("TS_LOGLEVEL", "loud")]));
        assert_eq!(logger.level(), Level::Info);

        let text = fs::read_to_string(&path).unwrap();
        let record = LogRecord::parse_line(text.lines().next().unwrap()).unwrap();
        assert_eq!(record.level, "warn");
        assert!(record.message.contains("keeping level info"));
    }
}
