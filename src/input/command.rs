//! Commands that keyboard input can trigger.
//!
//! Bindings map keys to a [`Command`]; `App::execute_command` applies it.

/// A user action, decoupled from the key that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,
    /// Switch light/dark mode (t)
    ToggleTheme,

    // =========================================================================
    // Search
    // =========================================================================
    /// Move focus into the search box (/)
    FocusSearch,
    /// Return focus to the grid (Enter, Esc while searching)
    LeaveSearch,
    /// Delete the last character of the active text field
    Backspace,
    /// Empty the search box (Ctrl+U)
    ClearSearch,
    /// Type a character into the active text field
    InsertChar(char),

    // =========================================================================
    // Sort
    // =========================================================================
    /// Flip between A-Z and Z-A (s)
    ToggleSort,
    SortAscending,
    SortDescending,

    // =========================================================================
    // Pagination
    // =========================================================================
    PreviousPage,
    NextPage,
    /// Open the go-to-page prompt (g)
    OpenPageJump,
    /// Jump to the typed page (Enter in the prompt)
    ConfirmPageJump,
    /// Abandon the prompt (Esc)
    CancelPageJump,

    // =========================================================================
    // Dialog
    // =========================================================================
    /// Dismiss the end-of-pages dialog
    CloseDialog,
}
