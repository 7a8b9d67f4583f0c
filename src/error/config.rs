//! Errors raised while assembling the runtime configuration.

use thiserror::Error;

/// Invalid command-line flag or environment value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value for {flag}")]
    MissingValue { flag: String },

    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("invalid theme '{0}' (expected 'light' or 'dark')")]
    InvalidTheme(String),
}
