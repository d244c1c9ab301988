//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade so the
//! rest of the crate never touches the backend directly.

mod init;

pub use init::{init_logging, LoggingConfig};
