//! Single-line text input with focus styling and placeholder.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Palette;

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Title shown in the top border
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    pub focused: bool,
    /// Shown dimmed when the value is empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows an input field occupies (border + content + border).
pub const INPUT_FIELD_HEIGHT: u16 = 3;

/// Text to display, keeping the tail visible when the value overflows.
fn visible_value(value: &str, width: usize) -> &str {
    if value.width() <= width {
        return value;
    }
    let mut start = 0;
    for (idx, _) in value.char_indices() {
        if value[idx..].width() <= width {
            start = idx;
            break;
        }
    }
    &value[start..]
}

pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    config: &InputFieldConfig,
    palette: &Palette,
) {
    let border_color = if config.focused {
        palette.accent
    } else {
        palette.border
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.label),
            Style::default().fg(palette.dim),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let inner_width = area.width.saturating_sub(2) as usize;
    let line = match config.placeholder {
        Some(placeholder) if config.value.is_empty() && !config.focused => {
            Line::from(Span::styled(placeholder, Style::default().fg(palette.dim)))
        }
        _ => {
            // leave one column for the block cursor
            let shown = visible_value(config.value, inner_width.saturating_sub(1));
            let mut spans = vec![Span::styled(
                shown.to_string(),
                Style::default().fg(palette.foreground),
            )];
            if config.focused {
                spans.push(Span::styled("\u{2588}", Style::default().fg(palette.accent)));
            }
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
