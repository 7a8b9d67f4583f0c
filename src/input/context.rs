//! Which bindings apply right now.

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Grid navigation
    #[default]
    Browse,
    /// Typing into the search box
    Search,
    /// Typing a page number
    PageJump,
}

/// Snapshot of the UI state relevant to key dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub mode: InputMode,
    /// The end-of-pages dialog captures every key but quit.
    pub dialog_open: bool,
}

impl InputContext {
    pub fn new(mode: InputMode, dialog_open: bool) -> Self {
        Self { mode, dialog_open }
    }
}
