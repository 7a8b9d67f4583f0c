//! Keyboard input handling.
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App::execute_command()
//! ```
//!
//! - [`command`] - the [`Command`] enum
//! - [`context`] - [`InputMode`] and [`InputContext`]
//! - [`keybindings`] - default key tables
//! - [`registry`] - [`CommandRegistry`] resolving keys to commands

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, InputMode};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;
