//! Dialog Frame Component
//!
//! A centered dialog with rounded borders. Clears whatever is underneath and
//! returns the inner area for content.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_HEADER};

#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 60,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

fn calculate_dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig, area_width: u16) -> u16 {
    let width = if ctx.is_extra_small() {
        area_width.saturating_sub(4).min(config.max_width)
    } else if ctx.is_narrow() {
        ctx.bounded_width(80, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(50, config.min_width, config.max_width)
    };
    width.min(area_width)
}

/// Render a centered dialog frame inside `area` and return its content area.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let dialog_width = calculate_dialog_width(ctx, config, area.width);
    let dialog_height = (config.content_height + 2).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(dialog_width) / 2,
        y: area.y + area.height.saturating_sub(dialog_height) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    inner
}
