//! Logging setup.
//!
//! Everything logs through the `log` facade; `env_logger` is the backend
//! installed by binaries via [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
