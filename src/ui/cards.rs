//! Grid of post cards for the current page.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Post;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{card_colors, Palette, CARD_TEXT};
use crate::view_state::{ViewState, PAGE_SIZE};

pub const LOADING_TEXT: &str = "Loading...";

/// Rows of cards a full page needs at this width.
pub fn grid_rows(ctx: &LayoutContext) -> u16 {
    let columns = ctx.grid_columns().max(1) as usize;
    PAGE_SIZE.div_ceil(columns) as u16
}

/// Split `area` into one cell per card, row-major.
///
/// Cells are sized for a full page so the grid does not reflow on the
/// last page.
pub fn grid_cells(area: Rect, ctx: &LayoutContext, count: usize) -> Vec<Rect> {
    let columns = ctx.grid_columns().max(1);
    let rows = grid_rows(ctx);

    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows as usize])
        .spacing(0)
        .split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns as usize])
                .spacing(1)
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}

fn card_lines(post: &Post) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            post.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(post.body.replace('\n', " ")),
    ]
}

fn render_card(frame: &mut Frame, area: Rect, post: &Post, index: usize) {
    let (background, border) = card_colors(index);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(background).fg(CARD_TEXT));

    let paragraph = Paragraph::new(card_lines(post))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Render the card grid, or the loading placeholder while the fetch is
/// outstanding. An empty result renders nothing.
pub fn render_cards(
    frame: &mut Frame,
    area: Rect,
    view: &ViewState,
    ctx: &LayoutContext,
    palette: &Palette,
) {
    if view.is_loading() {
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        let placeholder = Paragraph::new(LOADING_TEXT)
            .style(Style::default().fg(palette.dim))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, middle);
        return;
    }

    let derived = view.snapshot();
    let cells = grid_cells(area, ctx, derived.visible_items.len());
    for (index, (post, cell)) in derived.visible_items.iter().zip(cells).enumerate() {
        render_card(frame, cell, post, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_rows_by_width() {
        assert_eq!(grid_rows(&LayoutContext::new(40, 30)), 6);
        assert_eq!(grid_rows(&LayoutContext::new(80, 30)), 3);
        assert_eq!(grid_rows(&LayoutContext::new(120, 30)), 2);
    }

    #[test]
    fn test_grid_cells_partial_page() {
        let ctx = LayoutContext::new(120, 30);
        let cells = grid_cells(Rect::new(0, 0, 120, 20), &ctx, 4);
        assert_eq!(cells.len(), 4);
        // first row holds three cards, fourth wraps to the second row
        assert_eq!(cells[0].y, cells[2].y);
        assert!(cells[3].y > cells[0].y);
        assert_eq!(cells[3].x, cells[0].x);
    }

    #[test]
    fn test_card_lines_flatten_body() {
        let post = Post::new(1, "title", "line one\nline two");
        let lines = card_lines(&post);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].spans[0].content, "line one line two");
    }
}
