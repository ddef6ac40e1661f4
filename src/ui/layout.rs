//! Responsive layout helpers.
//!
//! `LayoutContext` wraps the terminal dimensions so render functions can make
//! proportional sizing decisions without reaching for the frame directly.

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal size breakpoints
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// A width as a percentage of the terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Proportional width clamped to `min..=max`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Side-by-side panels need at least 80 columns.
    pub fn should_stack_panels(&self) -> bool {
        self.is_narrow()
    }

    /// Rows given to each multi-line form field.
    pub fn field_height(&self) -> u16 {
        if self.is_short() {
            3
        } else {
            6
        }
    }
}

/// Split `area` into `(left, right)` at `left_percent`, or stack them
/// top/bottom when the terminal is narrow.
pub fn split_panels(ctx: &LayoutContext, area: Rect, left_percent: u16) -> (Rect, Rect) {
    let constraints = [
        Constraint::Percentage(left_percent),
        Constraint::Percentage(100 - left_percent.min(100)),
    ];
    let chunks = if ctx.should_stack_panels() {
        Layout::vertical(constraints).split(area)
    } else {
        Layout::horizontal(constraints).split(area)
    };
    (chunks[0], chunks[1])
}

/// Cut `text` to at most `max_width` terminal columns, ending in "..." when
/// anything was dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max_width >= 3 {
        out.push_str("...");
    }
    out
}
