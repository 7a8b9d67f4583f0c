//! UI rendering for the post board.
//!
//! The screen is a heading followed by the data view:
//! - Control bar: logo, theme toggle, search box, sort selector
//! - Card grid (or the loading placeholder)
//! - Pager and status line
//! - End-of-pages dialog overlay when it is visible
//!
//! Render functions take a [`LayoutContext`] so sizing decisions follow the
//! terminal width.

pub mod cards;
pub mod components;
pub mod controls;
pub mod dialog;
pub mod layout;
pub mod pager;
pub mod theme;

pub use layout::{breakpoints, LayoutContext};
pub use theme::{palette, Palette};

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use cards::render_cards;
use controls::{controls_height, render_controls};
use dialog::render_end_of_pages_dialog;
use pager::{render_pager, PAGER_HEIGHT};

pub const HEADING: &str = "Data Display Application";

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen from the app state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);
    let palette = palette(app.view.theme());

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        area,
    );

    let [heading_area, _, controls_area, grid_area, pager_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(controls_height(&ctx)),
        Constraint::Fill(1),
        Constraint::Length(PAGER_HEIGHT),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(HEADING)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        heading_area,
    );

    render_controls(frame, controls_area, app, &ctx, &palette);
    render_cards(frame, grid_area, &app.view, &ctx, &palette);
    render_pager(frame, pager_area, app, &palette);

    if app.view.is_dialog_visible() {
        render_end_of_pages_dialog(frame, area, &ctx, &palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::loader::PostsApi;
    use crate::view_state::Theme;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn create_test_app() -> App {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json("[]"));
        App::new(
            PostsApi::with_client(Arc::new(mock), "http://mock/posts"),
            Theme::Light,
        )
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_loading_screen() {
        let app = create_test_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains(HEADING));
        assert!(text.contains("Loading..."));
        assert!(text.contains("Search by title"));
    }

    #[test]
    fn test_render_survives_tiny_terminal() {
        let app = create_test_app();
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
    }
}
