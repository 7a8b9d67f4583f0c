//! Application state and command execution.
//!
//! [`App`] is the shell around the data view: it owns the [`ViewState`], the
//! input mode, the message channel, and the handle to the background load.

mod types;

pub use types::AppMessage;

use tokio::sync::mpsc;

use crate::input::{Command, InputContext, InputMode};
use crate::loader::{spawn_post_loader, LoadHandle, PostsApi};
use crate::view_state::{SortOrder, Theme, ViewState};

/// Longest accepted page-jump entry.
const MAX_PAGE_DIGITS: usize = 6;

/// Main application state.
pub struct App {
    /// State of the data view
    pub view: ViewState,
    /// Where keystrokes go
    pub input_mode: InputMode,
    /// Digits typed into the go-to-page prompt
    pub page_jump: String,
    /// Set when the user asked to quit
    pub should_quit: bool,
    /// Set when state changed since the last draw
    pub needs_redraw: bool,
    /// Terminal size, updated on resize
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the run loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    api: PostsApi,
    load_handle: Option<LoadHandle>,
}

impl App {
    pub fn new(api: PostsApi, theme: Theme) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            view: ViewState::new(theme),
            input_mode: InputMode::default(),
            page_jump: String::new(),
            should_quit: false,
            needs_redraw: true,
            terminal_width: 80,
            terminal_height: 24,
            message_tx,
            message_rx: Some(message_rx),
            api,
            load_handle: None,
        }
    }

    /// Start the post load. Later calls are no-ops; there is exactly one
    /// fetch per app.
    pub fn mount(&mut self) {
        if self.load_handle.is_some() {
            return;
        }
        self.load_handle = Some(spawn_post_loader(
            self.api.clone(),
            self.message_tx.clone(),
        ));
    }

    pub fn is_mounted(&self) -> bool {
        self.load_handle.is_some()
    }

    pub fn input_context(&self) -> InputContext {
        InputContext::new(self.input_mode, self.view.is_dialog_visible())
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Apply a message from a background task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::PostsLoaded(result) => self.view.apply_load_result(result),
        }
        self.mark_dirty();
    }

    /// Bracketed paste goes into the search box when it has focus.
    pub fn handle_paste(&mut self, text: &str) {
        if self.input_mode != InputMode::Search || self.view.is_dialog_visible() {
            return;
        }
        let line = text.lines().next().unwrap_or_default();
        self.view
            .set_search_term(format!("{}{}", self.view.search_term(), line));
        self.mark_dirty();
    }

    pub fn execute_command(&mut self, command: Command) {
        tracing::trace!("Command: {:?}", command);
        match command {
            Command::Quit => self.quit(),
            Command::ToggleTheme => self.view.toggle_theme(),

            Command::FocusSearch => self.input_mode = InputMode::Search,
            Command::LeaveSearch => self.input_mode = InputMode::Browse,
            Command::ClearSearch => self.view.set_search_term(""),
            Command::Backspace => match self.input_mode {
                InputMode::Search => self.view.pop_search_char(),
                InputMode::PageJump => {
                    self.page_jump.pop();
                }
                InputMode::Browse => {}
            },
            Command::InsertChar(c) => match self.input_mode {
                InputMode::Search => self.view.push_search_char(c),
                InputMode::PageJump => {
                    if c.is_ascii_digit() && self.page_jump.len() < MAX_PAGE_DIGITS {
                        self.page_jump.push(c);
                    }
                }
                InputMode::Browse => {}
            },

            Command::ToggleSort => self.view.toggle_sort_order(),
            Command::SortAscending => self.view.set_sort_order(SortOrder::Ascending),
            Command::SortDescending => self.view.set_sort_order(SortOrder::Descending),

            Command::PreviousPage => self.view.previous_page(),
            Command::NextPage => self.view.next_page(),
            Command::OpenPageJump => {
                self.page_jump.clear();
                self.input_mode = InputMode::PageJump;
            }
            Command::ConfirmPageJump => {
                if let Ok(page) = self.page_jump.parse::<usize>() {
                    self.view.go_to_page(page);
                }
                self.page_jump.clear();
                self.input_mode = InputMode::Browse;
            }
            Command::CancelPageJump => {
                self.page_jump.clear();
                self.input_mode = InputMode::Browse;
            }

            Command::CloseDialog => self.view.close_dialog(),
        }
        self.mark_dirty();
    }
}
