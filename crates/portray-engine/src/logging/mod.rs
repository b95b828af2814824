//! Logging setup.
//!
//! Everything logs through the `log` facade; `env_logger` is installed once
//! by the host.

mod init;

pub use init::{LoggingConfig, init_logging};
