//! Persistent chrome around every screen: title and nav header, key hints
//! footer.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::service_badge;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::app::{App, Screen};
use crate::pages::{FeedbackFocus, Page};

pub const APP_TITLE: &str = "Healthcare App";

/// Split the frame into header, body and footer.
pub fn shell_areas(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);
    (chunks[0], chunks[1], chunks[2])
}

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let screen = app.screen();
    let nav_item = |key: &str, label: &str, active: bool| {
        let style = if active {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        Span::styled(format!("{} {}", key, label), style)
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", APP_TITLE),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        nav_item("F1", "Home", screen != Screen::Feedback),
        Span::raw("  "),
        nav_item("F2", "Feedback", screen == Screen::Feedback),
        Span::raw("   "),
    ];
    spans.extend(service_badge(app.service_health));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(header, area);
}

/// Key hints for the mounted screen, as (key, description) pairs.
pub fn key_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = match &app.page {
        Page::Dashboard(page) if page.registration.is_some() => vec![
            ("Tab", "next field"),
            ("Ctrl+S", "register"),
            ("Esc", "cancel"),
        ],
        Page::Dashboard(page) => {
            let mut hints = vec![
                ("↑↓", "select"),
                ("Enter", "start session"),
                ("n", "new patient"),
            ];
            if page.error.is_some() {
                hints.push(("r", "retry"));
            }
            hints
        }
        Page::Session(page) if page.session.is_none() => vec![("Esc", "back to dashboard")],
        Page::Session(_) => vec![
            ("Tab", "switch field"),
            ("Ctrl+S", "save"),
            ("F2", "feedback"),
            ("Esc", "back"),
        ],
        Page::Feedback(page) if page.focus == FeedbackFocus::Sessions => vec![
            ("↑↓", "move"),
            ("Enter", "select"),
            ("Tab", "write feedback"),
            ("Ctrl+S", "submit"),
        ],
        Page::Feedback(_) => vec![
            ("Tab", "sessions"),
            ("Ctrl+S", "submit"),
            ("Esc", "back to list"),
        ],
    };
    hints.push(("Ctrl+C", "quit"));
    hints
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, description)) in key_hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(COLOR_BORDER)));
        }
        spans.push(Span::styled(
            key,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", description),
            Style::default().fg(COLOR_DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_areas() {
        let (header, body, footer) = shell_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 2);
        assert_eq!(body.y, 2);
        assert_eq!(body.height, 21);
        assert_eq!(footer.y, 23);
    }
}
