//! Output target designators

use std::fmt;
use std::path::PathBuf;

/// Keyword for logging to standard output
pub const STDOUT_TARGET: &str = "stdout";
/// Keyword for dropping all records
pub const DISCARD_TARGET: &str = "discard";
/// Keyword for logging into a new file in the temp directory
pub const TMP_TARGET: &str = "tmp";

/// Where a logger should write its records
///
/// Any string that is not one of the reserved keywords is a file path,
/// including the empty string (which the resolver then rejects).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    Discard,
    Tmp,
    Path(String),
}

impl OutputTarget {
    /// Parse a designator
    pub fn parse(s: &str) -> Self {
        match s {
            STDOUT_TARGET => OutputTarget::Stdout,
            DISCARD_TARGET => OutputTarget::Discard,
            TMP_TARGET => OutputTarget::Tmp,
            path => OutputTarget::Path(path.to_string()),
        }
    }

    /// Designator as text
    pub fn as_str(&self) -> &str {
        match self {
            OutputTarget::Stdout => STDOUT_TARGET,
            OutputTarget::Discard => DISCARD_TARGET,
            OutputTarget::Tmp => TMP_TARGET,
            OutputTarget::Path(path) => path,
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for OutputTarget {
    fn from(s: &str) -> Self {
        OutputTarget::parse(s)
    }
}

impl From<String> for OutputTarget {
    fn from(s: String) -> Self {
        OutputTarget::parse(&s)
    }
}

impl From<&String> for OutputTarget {
    fn from(s: &String) -> Self {
        OutputTarget::parse(s)
    }
}

impl From<PathBuf> for OutputTarget {
    fn from(path: PathBuf) -> Self {
        OutputTarget::Path(path.to_string_lossy().into_owned())
    }
}

impl From<&std::path::Path> for OutputTarget {
    fn from(path: &std::path::Path) -> Self {
        OutputTarget::Path(path.to_string_lossy().into_owned())
    }
}
