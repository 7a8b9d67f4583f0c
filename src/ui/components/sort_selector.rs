//! Two-option sort selector rendered as a single line.
//!
//! The chosen option carries a `▶` marker; narrow terminals get short labels.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;
use crate::view_state::SortOrder;

const OPTIONS: [SortOrder; 2] = [SortOrder::Ascending, SortOrder::Descending];

fn short_label(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Ascending => "A-Z",
        SortOrder::Descending => "Z-A",
    }
}

pub fn render_sort_selector(
    selected: SortOrder,
    ctx: &LayoutContext,
    palette: &Palette,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    for (idx, order) in OPTIONS.iter().enumerate() {
        let label = if ctx.is_narrow() {
            short_label(*order)
        } else {
            order.label()
        };

        if *order == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(palette.foreground)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(label, Style::default().fg(palette.dim)));
        }

        if idx < OPTIONS.len() - 1 {
            spans.push(Span::raw("  "));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::palette;
    use crate::view_state::Theme;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_marker_precedes_selected_option() {
        let ctx = LayoutContext::new(120, 40);
        let line = render_sort_selector(SortOrder::Descending, &ctx, &palette(Theme::Light));
        let text = text(&line);

        let marker = text.find('▶').unwrap();
        assert!(marker > text.find("(A-Z)").unwrap());
        assert!(marker < text.find("(Z-A)").unwrap());
    }

    #[test]
    fn test_narrow_uses_short_labels() {
        let ctx = LayoutContext::new(50, 20);
        let line = render_sort_selector(SortOrder::Ascending, &ctx, &palette(Theme::Dark));
        let text = text(&line);
        assert!(text.contains("▶ A-Z"));
        assert!(!text.contains("Sort by"));
    }
}
