//! Logging utilities.
//!
//! Only logger initialization lives here; the rest of the crate logs through
//! the `log` facade and never installs a backend itself.

mod init;

pub use init::{init_logging, LoggingConfig};
