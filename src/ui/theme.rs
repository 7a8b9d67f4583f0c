//! Color palettes for the light and dark modes.

use ratatui::style::Color;

use crate::view_state::Theme;

/// Color tokens for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    /// Secondary text, disabled controls
    pub dim: Color,
    pub border: Color,
    /// Focused input border, current page
    pub accent: Color,
    pub error: Color,
    pub dialog_background: Color,
}

const LIGHT: Palette = Palette {
    background: Color::White,
    foreground: Color::Black,
    dim: Color::Gray,
    border: Color::DarkGray,
    accent: Color::Rgb(49, 130, 206),
    error: Color::Rgb(229, 62, 62),
    dialog_background: Color::Rgb(237, 242, 247),
};

const DARK: Palette = Palette {
    background: Color::Rgb(26, 32, 44),
    foreground: Color::White,
    dim: Color::DarkGray,
    border: Color::Gray,
    accent: Color::Rgb(99, 179, 237),
    error: Color::Rgb(252, 129, 129),
    dialog_background: Color::Rgb(45, 55, 72),
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}

/// Card background/border pairs, cycled by position on the page.
pub const CARD_COLORS: [(Color, Color); 6] = [
    (Color::Rgb(49, 151, 149), Color::Rgb(56, 161, 105)), // teal, green
    (Color::Rgb(221, 107, 32), Color::Rgb(214, 158, 46)), // orange, yellow
    (Color::Rgb(128, 90, 213), Color::Rgb(213, 63, 140)), // purple, pink
    (Color::Rgb(49, 130, 206), Color::Rgb(0, 181, 216)),  // blue, cyan
    (Color::Rgb(229, 62, 62), Color::Rgb(214, 158, 46)),  // red, yellow
    (Color::Rgb(56, 161, 105), Color::Rgb(49, 130, 206)), // green, blue
];

/// Card text is white in both modes.
pub const CARD_TEXT: Color = Color::White;

pub fn card_colors(index: usize) -> (Color, Color) {
    CARD_COLORS[index % CARD_COLORS.len()]
}
