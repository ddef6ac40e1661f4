//! Status Indicator Component
//!
//! Spinner lines for in-flight requests, banner lines for the page message
//! slot, and the service reachability badge in the header.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::ServiceHealth;
use crate::pages::{Banner, BannerKind};
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_PENDING, COLOR_SUCCESS};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks each spinner frame stays on screen
const TICKS_PER_FRAME: u64 = 2;

/// Get the spinner character for an animation tick
pub fn get_spinner_char(tick: u64) -> char {
    SPINNER_FRAMES[((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

/// A spinner followed by a message, e.g. "◐ Loading patients..."
pub fn spinner_line(message: &str, tick: u64) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} ", get_spinner_char(tick)),
            Style::default().fg(COLOR_PENDING),
        ),
        Span::styled(
            message.to_string(),
            Style::default()
                .fg(COLOR_PENDING)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// The page message slot as a single line.
pub fn banner_line(banner: &Banner) -> Line<'static> {
    let (icon, color) = match banner.kind {
        BannerKind::Success => ("\u{25CF} ", COLOR_SUCCESS), // bullet
        BannerKind::Error => ("\u{2717} ", COLOR_ERROR),     // X mark
    };
    Line::from(vec![
        Span::styled(icon, Style::default().fg(color)),
        Span::styled(
            banner.text.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Header badge for service reachability.
pub fn service_badge(health: ServiceHealth) -> Vec<Span<'static>> {
    let color = match health {
        ServiceHealth::Unknown => COLOR_DIM,
        ServiceHealth::Online => COLOR_SUCCESS,
        ServiceHealth::Offline => COLOR_ERROR,
    };
    vec![
        Span::styled("\u{25CF} ", Style::default().fg(color)),
        Span::styled(
            format!("API {}", health.label()),
            Style::default().fg(color),
        ),
    ]
}
