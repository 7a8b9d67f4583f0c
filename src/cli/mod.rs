//! Command-line interface: argument parsing and version display.
//!
//! `main` parses arguments before touching the terminal so `--help` and
//! `--version` print to a normal screen.

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOverrides, USAGE};
pub use version::VERSION;
