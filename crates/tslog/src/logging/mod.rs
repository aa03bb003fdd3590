//! Leveled logging
//!
//! - `Log` trait and helpers for code that only needs to write records
//! - `Logger`, the level-gated JSON logger
//! - a process-wide default `Logger`

mod traits;
mod logger;
mod global;

pub use traits::{Log, LogExt, SharedLog};
pub use logger::Logger;
pub use global::{default_logger, install_default};
