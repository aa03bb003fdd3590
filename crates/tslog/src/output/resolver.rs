//! Resolve output targets into open sinks

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::{LogError, LogResult};

use super::sink::Sink;
use super::target::OutputTarget;

/// Prefix of log files created for the `tmp` target
pub const DEFAULT_TMP_PREFIX: &str = "tslog_";

/// Opens sinks for output targets
///
/// Keywords are handled before any filesystem access, in the order
/// `discard`, `stdout`, `tmp`. Everything else is validated with
/// [`check_file`] and opened for appending, so reconfiguring a logger
/// against the same path accumulates records instead of truncating them.
///
/// The caller decides what to fall back to on error; `Logger` always falls
/// back to standard output.
#[derive(Debug, Clone, Default)]
pub struct OutputResolver {
    tmp_dir: Option<PathBuf>,
}

impl OutputResolver {
    /// Resolver creating temp files as `tslog_*` in the system temp directory
    pub fn new() -> Self {
        Self { tmp_dir: None }
    }

    /// Create temp files in `dir` instead of the system temp directory
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tmp_dir = Some(dir.into());
        self
    }

    /// Directory temp files are created in
    pub fn temp_dir(&self) -> PathBuf {
        self.tmp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Open a sink for `target`
    pub fn resolve(&self, target: &OutputTarget) -> LogResult<Sink> {
        match target {
            OutputTarget::Discard => Ok(Sink::Discard),
            OutputTarget::Stdout => Ok(Sink::Stdout),
            OutputTarget::Tmp => self.create_tmp(),
            OutputTarget::Path(path) => {
                check_file(path)?;
                open_append(Path::new(path))
            }
        }
    }

    fn create_tmp(&self) -> LogResult<Sink> {
        let dir = self.temp_dir();
        let pattern = format!("{}*", DEFAULT_TMP_PREFIX);
        let tmp = tempfile::Builder::new()
            .prefix(DEFAULT_TMP_PREFIX)
            .tempfile_in(&dir)
            .map_err(|source| LogError::ResourceCreationFailed {
                pattern: dir.join(&pattern).display().to_string(),
                source,
            })?;

        // Keep the file around after the logger lets go of it
        let (file, path) = tmp.keep().map_err(|e| LogError::ResourceCreationFailed {
            pattern: dir.join(&pattern).display().to_string(),
            source: e.error,
        })?;

        Ok(Sink::file(file, path))
    }
}

fn open_append(path: &Path) -> LogResult<Sink> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::ResourceOpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Sink::file(file, path))
}

/// Check that `path` can name a regular log file.
///
/// Rejects the empty string, names ending in a path separator, and paths
/// that exist but are not regular files. A path that does not exist yet
/// passes; whether it can be created is found out when it is opened.
pub fn check_file(path: &str) -> LogResult<()> {
    if path.is_empty() {
        return Err(LogError::check_failed(path, "empty file name"));
    }
    if path.ends_with('/') || path.ends_with('\\') {
        return Err(LogError::check_failed(path, "directory, not file"));
    }
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Err(LogError::check_failed(path, "directory, not file")),
        Ok(meta) if !meta.is_file() => Err(LogError::check_failed(path, "not a regular file")),
        _ => Ok(()),
    }
}
