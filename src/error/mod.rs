//! Error types for postboard.
//!
//! - [`FetchError`] - loading posts failed (transport, status, decode)
//! - [`ConfigError`] - bad flag or environment value at startup
//!
//! The binary wraps everything in `color_eyre::Result`; these enums are what
//! the library returns.

mod config;
mod fetch;

pub use config::ConfigError;
pub use fetch::FetchError;
