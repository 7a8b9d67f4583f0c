//! State owned by the data view and the transitions that mutate it.

use crate::error::FetchError;
use crate::models::Post;

use super::derive::{count_matches, derive_view, page_count, DerivedView, SortOrder};
use super::theme::Theme;

/// Whether the initial load has settled.
///
/// `Loading → Ready` happens exactly once and never reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
}

/// Enabled state of the Previous/Next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerControls {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

/// The complete local state of the data view.
///
/// Fields are read-only from outside; every change goes through a named
/// transition so the page reset and dialog rules hold.
#[derive(Debug, Clone)]
pub struct ViewState {
    items: Vec<Post>,
    search_term: String,
    sort_order: SortOrder,
    current_page: usize,
    loading: bool,
    dialog_visible: bool,
    theme: Theme,
    load_error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ViewState {
    /// Fresh state for a newly mounted view.
    pub fn new(theme: Theme) -> Self {
        Self {
            items: Vec::new(),
            search_term: String::new(),
            sort_order: SortOrder::default(),
            current_page: 1,
            loading: true,
            dialog_visible: false,
            theme,
            load_error: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn items(&self) -> &[Post] {
        &self.items
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog_visible
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Message for a failed load, if the load failed.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn phase(&self) -> LoadPhase {
        if self.loading {
            LoadPhase::Loading
        } else {
            LoadPhase::Ready
        }
    }

    /// Derive the current page from the state.
    pub fn snapshot(&self) -> DerivedView<'_> {
        derive_view(
            &self.items,
            &self.search_term,
            self.sort_order,
            self.current_page,
        )
    }

    pub fn page_count(&self) -> usize {
        page_count(count_matches(&self.items, &self.search_term))
    }

    pub fn pager_controls(&self) -> PagerControls {
        PagerControls {
            previous_enabled: self.current_page > 1,
            next_enabled: self.current_page < self.page_count(),
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Settle the initial load. Only the first call has any effect.
    pub fn apply_load_result(&mut self, result: Result<Vec<Post>, FetchError>) {
        if !self.loading {
            tracing::warn!("Ignoring load result: view already settled");
            return;
        }

        match result {
            Ok(posts) => {
                tracing::info!("Loaded {} posts", posts.len());
                self.items = posts;
            }
            Err(err) => {
                tracing::error!(retryable = err.is_retryable(), "Failed to load posts: {}", err);
                self.load_error = Some(err.user_message());
            }
        }
        self.loading = false;
        self.current_page = 1;
    }

    /// Replace the search term. Resets to page 1 when the term changes.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        tracing::debug!("Search term: {:?}", term);
        self.search_term = term;
        self.current_page = 1;
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut term = self.search_term.clone();
        term.push(c);
        self.set_search_term(term);
    }

    pub fn pop_search_char(&mut self) {
        let mut term = self.search_term.clone();
        term.pop();
        self.set_search_term(term);
    }

    /// Replace the sort order. Resets to page 1 when the order changes.
    pub fn set_sort_order(&mut self, order: SortOrder) {
        if order == self.sort_order {
            return;
        }
        tracing::debug!("Sort order: {:?}", order);
        self.sort_order = order;
        self.current_page = 1;
    }

    pub fn toggle_sort_order(&mut self) {
        self.set_sort_order(self.sort_order.toggled());
    }

    /// Request a 1-based page.
    ///
    /// Pages past the last one open the end-of-pages dialog instead of
    /// moving. Page zero is rejected.
    pub fn go_to_page(&mut self, page: usize) {
        if page == 0 {
            tracing::debug!("Rejected request for page 0");
            return;
        }
        let page_count = self.page_count();
        if page > page_count {
            tracing::debug!("Page {} beyond last page {}", page, page_count);
            self.dialog_visible = true;
            return;
        }
        self.current_page = page;
    }

    /// Advance one page if the Next control is enabled.
    pub fn next_page(&mut self) {
        if self.pager_controls().next_enabled {
            self.go_to_page(self.current_page + 1);
        }
    }

    /// Go back one page if the Previous control is enabled.
    pub fn previous_page(&mut self) {
        if self.pager_controls().previous_enabled {
            self.go_to_page(self.current_page - 1);
        }
    }

    /// Dismiss the end-of-pages dialog. Does not touch the page.
    pub fn close_dialog(&mut self) {
        self.dialog_visible = false;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!("Theme: {:?}", self.theme);
    }
}
