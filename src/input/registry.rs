//! Key → command resolution.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, InputMode};
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Resolves key events to commands using a [`KeybindingConfig`].
///
/// Lookup order: global bindings, then the dialog (which swallows all other
/// keys while open), then the table for the current [`InputMode`]. Text modes
/// fall back to [`Command::InsertChar`] for unbound printable keys.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let combo = KeyCombo::new(key.code, key.modifiers);

        if let Some(command) = self.config.global.get(&combo) {
            return Some(*command);
        }

        if context.dialog_open {
            return self.config.dialog.get(&combo).copied();
        }

        match context.mode {
            InputMode::Browse => self.config.browse.get(&combo).copied(),
            InputMode::Search => self
                .config
                .search
                .get(&combo)
                .copied()
                .or_else(|| typed_char(&key).map(Command::InsertChar)),
            InputMode::PageJump => self.config.page_jump.get(&combo).copied().or_else(|| {
                typed_char(&key)
                    .filter(char::is_ascii_digit)
                    .map(Command::InsertChar)
            }),
        }
    }
}

/// Printable character for keys typed without Ctrl/Alt.
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(c)
        }
        _ => None,
    }
}
