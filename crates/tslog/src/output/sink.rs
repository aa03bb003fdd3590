//! Write destinations

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// An open destination for log records
///
/// A sink is owned by exactly one logger. File sinks are closed when the
/// sink is replaced or dropped.
#[derive(Debug, Default)]
pub enum Sink {
    /// Standard output
    #[default]
    Stdout,
    /// Accepts every write and keeps nothing
    Discard,
    /// An open file, opened for appending
    File { file: File, path: PathBuf },
}

/// Description of where a sink writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Discard,
    File(PathBuf),
}

impl Sink {
    /// Wrap an open file
    pub fn file(file: File, path: impl Into<PathBuf>) -> Self {
        Sink::File {
            file,
            path: path.into(),
        }
    }

    /// Describe this sink
    pub fn destination(&self) -> Destination {
        match self {
            Sink::Stdout => Destination::Stdout,
            Sink::Discard => Destination::Discard,
            Sink::File { path, .. } => Destination::File(path.clone()),
        }
    }

    /// Write one complete line, ignoring failures.
    ///
    /// Logging never fails the caller because the destination is broken.
    pub fn write_line(&mut self, line: &[u8]) {
        let _ = self.try_write_line(line);
    }

    fn try_write_line(&mut self, line: &[u8]) -> io::Result<()> {
        match self {
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line)?;
                out.flush()
            }
            Sink::Discard => Ok(()),
            Sink::File { file, .. } => {
                file.write_all(line)?;
                file.flush()
            }
        }
    }

    /// Flush and release the underlying resource
    pub fn close(self) {
        match self {
            Sink::Stdout => {
                let _ = io::stdout().flush();
            }
            Sink::Discard => {}
            Sink::File { mut file, .. } => {
                let _ = file.flush();
                drop(file);
            }
        }
    }
}
