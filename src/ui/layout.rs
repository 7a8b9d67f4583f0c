//! Responsive sizing.
//!
//! [`LayoutContext`] carries the terminal size and answers layout questions
//! such as how many card columns fit.

/// Terminal width breakpoints
pub mod breakpoints {
    /// Below this the dialog takes nearly the full width
    pub const XS_WIDTH: u16 = 50;
    /// Two card columns from here
    pub const MD_WIDTH: u16 = 60;
    /// Three card columns from here
    pub const LG_WIDTH: u16 = 100;
}

/// Terminal dimensions plus derived layout decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: ratatui::layout::Rect) -> Self {
        Self::new(area.width, area.height)
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::MD_WIDTH
    }

    /// Card columns: one on narrow terminals, two on medium, three on wide.
    pub fn grid_columns(&self) -> u16 {
        if self.width < breakpoints::MD_WIDTH {
            1
        } else if self.width < breakpoints::LG_WIDTH {
            2
        } else {
            3
        }
    }

    /// Width as a percentage of the terminal, at least 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }
}
