//! Startup: configuration assembly and logging.
//!
//! - [`config`] - [`AppConfig`] from defaults, environment, and flags
//! - [`logging`] - file-backed `tracing` subscriber

pub mod config;
pub mod logging;

pub use config::{default_log_file, AppConfig};
pub use logging::init_logging;
