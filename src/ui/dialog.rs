//! End-of-pages dialog.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::components::{render_dialog_frame, DialogFrameConfig};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

pub const DIALOG_TITLE: &str = "End of Pages";
pub const DIALOG_MESSAGE: &str = "No more pages. Thank you for visiting.";
pub const CLOSE_LABEL: &str = "[ Close ]";

pub fn render_end_of_pages_dialog(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    palette: &Palette,
) {
    let config = DialogFrameConfig::new(DIALOG_TITLE, 3)
        .min_width(44)
        .max_width(60);
    let inner = render_dialog_frame(frame, area, ctx, &config, palette);

    let lines = vec![
        Line::from(Span::styled(
            DIALOG_MESSAGE,
            Style::default().fg(palette.foreground),
        )),
        Line::from(""),
        Line::from(Span::styled(
            CLOSE_LABEL,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(palette.dialog_background)),
        inner,
    );
}
