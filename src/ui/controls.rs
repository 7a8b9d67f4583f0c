//! Control bar: logo, theme toggle, search box and sort selector.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::input::InputMode;
use crate::ui::components::{
    render_input_field, render_sort_selector, InputFieldConfig, INPUT_FIELD_HEIGHT,
};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

pub const SEARCH_PLACEHOLDER: &str = "Search by title";
const LOGO: &str = "Logo";

/// Rows the control bar needs. Narrow terminals stack the sort selector
/// under the search box.
pub fn controls_height(ctx: &LayoutContext) -> u16 {
    if ctx.is_narrow() {
        1 + INPUT_FIELD_HEIGHT + 1
    } else {
        1 + INPUT_FIELD_HEIGHT
    }
}

fn theme_button(app: &App, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled("[ ", Style::default().fg(palette.border)),
        Span::styled(
            app.view.theme().toggle_icon(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ]", Style::default().fg(palette.border)),
    ])
}

pub fn render_controls(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    ctx: &LayoutContext,
    palette: &Palette,
) {
    let [top, rest] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

    let [logo_area, toggle_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(5)]).areas(top);
    frame.render_widget(
        Paragraph::new(Span::styled(
            LOGO,
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        logo_area,
    );
    frame.render_widget(
        Paragraph::new(theme_button(app, palette)).alignment(Alignment::Right),
        toggle_area,
    );

    let search = InputFieldConfig::new("Search", app.view.search_term())
        .focused(app.input_mode == InputMode::Search)
        .placeholder(SEARCH_PLACEHOLDER);
    let selector = render_sort_selector(app.view.sort_order(), ctx, palette);

    if ctx.is_narrow() {
        let [search_area, sort_area] = Layout::vertical([
            Constraint::Length(INPUT_FIELD_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(rest);
        render_input_field(frame, search_area, &search, palette);
        frame.render_widget(Paragraph::new(selector), sort_area);
    } else {
        let [search_area, sort_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Fill(1)])
                .spacing(2)
                .areas(rest);
        render_input_field(frame, search_area, &search, palette);
        // align with the text row of the search box
        let sort_line = Rect {
            y: sort_area.y + 1,
            height: 1u16.min(sort_area.height.saturating_sub(1)),
            ..sort_area
        };
        frame.render_widget(
            Paragraph::new(selector).alignment(Alignment::Right),
            sort_line,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_height() {
        assert_eq!(controls_height(&LayoutContext::new(40, 24)), 5);
        assert_eq!(controls_height(&LayoutContext::new(120, 24)), 4);
    }
}
