//! Pagination controls and the status line below the grid.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::input::InputMode;
use crate::ui::theme::Palette;
use crate::view_state::ViewState;

/// Rows used by the pager (controls + status).
pub const PAGER_HEIGHT: u16 = 2;

pub const PREVIOUS_LABEL: &str = "◀ Previous";
pub const NEXT_LABEL: &str = "Next ▶";

fn control_style(enabled: bool, palette: &Palette) -> Style {
    if enabled {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim).add_modifier(Modifier::DIM)
    }
}

pub fn pager_line(view: &ViewState, palette: &Palette) -> Line<'static> {
    let controls = view.pager_controls();
    Line::from(vec![
        Span::styled(PREVIOUS_LABEL, control_style(controls.previous_enabled, palette)),
        Span::raw("   "),
        Span::styled(
            format!("Page {} of {}", view.current_page(), view.page_count()),
            Style::default().fg(palette.foreground),
        ),
        Span::raw("   "),
        Span::styled(NEXT_LABEL, control_style(controls.next_enabled, palette)),
    ])
}

fn key_hints(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Browse => "/ search  s sort  ←/→ page  g go to  t theme  q quit",
        InputMode::Search => "type to filter  Ctrl+U clear  Enter/Esc done",
        InputMode::PageJump => "Enter go  Esc cancel",
    }
}

pub fn status_line(app: &App, palette: &Palette) -> Line<'static> {
    let hints = Span::styled(
        format!("  {}", key_hints(app.input_mode)),
        Style::default().fg(palette.dim),
    );

    if app.input_mode == InputMode::PageJump {
        return Line::from(vec![
            Span::styled(
                format!("Go to page: {}", app.page_jump),
                Style::default().fg(palette.foreground),
            ),
            Span::styled("\u{2588}", Style::default().fg(palette.accent)),
            hints,
        ]);
    }

    if let Some(error) = app.view.load_error() {
        return Line::from(vec![
            Span::styled(error.to_string(), Style::default().fg(palette.error)),
            hints,
        ]);
    }

    if app.view.is_loading() {
        return Line::from(hints);
    }

    let matches = app.view.snapshot().total_matches;
    let noun = if matches == 1 { "post" } else { "posts" };
    Line::from(vec![
        Span::styled(
            format!("{} {}", matches, noun),
            Style::default().fg(palette.foreground),
        ),
        hints,
    ])
}

pub fn render_pager(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [controls_area, status_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(pager_line(&app.view, palette)).alignment(Alignment::Center),
        controls_area,
    );
    frame.render_widget(Paragraph::new(status_line(app, palette)), status_area);
}
