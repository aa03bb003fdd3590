//! Output targets and sinks
//!
//! This module turns a caller-supplied target designator into an open sink:
//! - `OutputTarget` parses the reserved keywords `stdout`, `discard` and `tmp`
//! - `OutputResolver` opens the sink, or reports why it could not
//! - `Sink` is the destination a `Logger` writes its records to

mod target;
mod sink;
mod resolver;

pub use target::{OutputTarget, DISCARD_TARGET, STDOUT_TARGET, TMP_TARGET};
pub use sink::{Destination, Sink};
pub use resolver::{check_file, OutputResolver, DEFAULT_TMP_PREFIX};
