//! Default keybindings.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Key combo with Control held.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

/// Keybinding tables, one per input context.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active everywhere, including over the dialog
    pub global: HashMap<KeyCombo, Command>,
    /// Grid navigation
    pub browse: HashMap<KeyCombo, Command>,
    /// Search box focused
    pub search: HashMap<KeyCombo, Command>,
    /// Page prompt open
    pub page_jump: HashMap<KeyCombo, Command>,
    /// End-of-pages dialog open
    pub dialog: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            browse: HashMap::new(),
            search: HashMap::new(),
            page_jump: HashMap::new(),
            dialog: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_browse_bindings();
        config.setup_search_bindings();
        config.setup_page_jump_bindings();
        config.setup_dialog_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
    }

    fn setup_browse_bindings(&mut self) {
        let bindings = [
            (KeyCode::Char('q'), Command::Quit),
            (KeyCode::Char('/'), Command::FocusSearch),
            (KeyCode::Char('s'), Command::ToggleSort),
            (KeyCode::Char('a'), Command::SortAscending),
            (KeyCode::Char('d'), Command::SortDescending),
            (KeyCode::Left, Command::PreviousPage),
            (KeyCode::Char('h'), Command::PreviousPage),
            (KeyCode::Char('p'), Command::PreviousPage),
            (KeyCode::Right, Command::NextPage),
            (KeyCode::Char('l'), Command::NextPage),
            (KeyCode::Char('n'), Command::NextPage),
            (KeyCode::Char('g'), Command::OpenPageJump),
            (KeyCode::Char('t'), Command::ToggleTheme),
        ];
        for (code, command) in bindings {
            self.browse.insert(KeyCombo::plain(code), command);
        }
    }

    fn setup_search_bindings(&mut self) {
        self.search
            .insert(KeyCombo::plain(KeyCode::Enter), Command::LeaveSearch);
        self.search
            .insert(KeyCombo::plain(KeyCode::Esc), Command::LeaveSearch);
        self.search
            .insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        self.search
            .insert(KeyCombo::ctrl(KeyCode::Char('u')), Command::ClearSearch);
    }

    fn setup_page_jump_bindings(&mut self) {
        self.page_jump
            .insert(KeyCombo::plain(KeyCode::Enter), Command::ConfirmPageJump);
        self.page_jump
            .insert(KeyCombo::plain(KeyCode::Esc), Command::CancelPageJump);
        self.page_jump
            .insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
    }

    fn setup_dialog_bindings(&mut self) {
        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char('c')] {
            self.dialog.insert(KeyCombo::plain(code), Command::CloseDialog);
        }
    }
}
