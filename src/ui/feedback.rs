//! Feedback screen rendering.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::components::{banner_line, spinner_line};
use super::layout::{split_panels, truncate_to_width, LayoutContext};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED_BG, COLOR_SUCCESS,
};
use crate::models::Session;
use crate::pages::feedback::{FeedbackFocus, FeedbackPage};
use crate::widgets::TextFieldWidget;

/// Picker row text for a session.
pub fn session_label(session: &Session) -> String {
    format!(
        "Session {} - Patient ID: {} ({})",
        session.id,
        session.patient_id,
        session.local_date()
    )
}

pub fn render_feedback(frame: &mut Frame, area: Rect, page: &FeedbackPage, tick: u64) {
    if page.loading {
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height));
        frame.render_widget(
            Paragraph::new(spinner_line("Loading sessions...", tick)).alignment(Alignment::Center),
            row,
        );
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(if page.message.is_some() { 2 } else { 0 }),
        Constraint::Min(6),
    ])
    .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Session Feedback",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Provide feedback for completed healthcare sessions",
            Style::default().fg(COLOR_DIM),
        )),
    ]);
    frame.render_widget(title, chunks[0]);

    if let Some(message) = &page.message {
        frame.render_widget(Paragraph::new(banner_line(message)), chunks[1]);
    }

    let ctx = LayoutContext::from_rect(area);
    let (left, right) = split_panels(&ctx, chunks[2], 45);
    render_session_picker(frame, left, page);
    render_form(frame, right, page);
}

fn render_session_picker(frame: &mut Frame, area: Rect, page: &FeedbackPage) {
    let focused = page.focus == FeedbackFocus::Sessions;
    let block = Block::default()
        .title(" Select Session * ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { COLOR_ACCENT } else { COLOR_BORDER }));

    if page.sessions.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No sessions yet.", Style::default().fg(COLOR_DIM)))
                .block(block),
            area,
        );
        return;
    }

    let selected_id = page.selected.as_ref().map(|session| session.id);
    let text_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = page
        .sessions
        .iter()
        .map(|session| {
            let marker = if Some(session.id) == selected_id { "● " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(COLOR_SUCCESS)),
                Span::raw(truncate_to_width(&session_label(session), text_width)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(COLOR_SELECTED_BG));
    let mut state = ListState::default().with_selected(focused.then_some(page.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_form(frame: &mut Frame, area: Rect, page: &FeedbackPage) {
    let summary_height = if page.selected.is_some() { 6 } else { 1 };
    let chunks = Layout::vertical([
        Constraint::Length(summary_height),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    match &page.selected {
        Some(session) => render_summary(frame, chunks[0], session),
        None => frame.render_widget(
            Paragraph::new(Span::styled(
                "Choose a session...",
                Style::default().fg(COLOR_DIM),
            )),
            chunks[0],
        ),
    }

    frame.render_widget(
        TextFieldWidget::new(
            &page.feedback,
            "Feedback",
            page.focus == FeedbackFocus::Feedback,
        )
        .required(true)
        .placeholder("Provide detailed feedback about the session..."),
        chunks[1],
    );

    let submit = if page.submitting {
        Span::styled("[ Submitting... ]", Style::default().fg(COLOR_DIM))
    } else if page.can_submit() {
        Span::styled(
            "[ Submit Feedback ]",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("[ Submit Feedback ]", Style::default().fg(COLOR_DIM))
    };
    frame.render_widget(Paragraph::new(Line::from(submit)), chunks[2]);
}

fn render_summary(frame: &mut Frame, area: Rect, session: &Session) {
    let label = Style::default().fg(COLOR_DIM);
    let row = |name: &str, value: String| {
        Line::from(vec![Span::styled(format!("{}: ", name), label), Span::raw(value)])
    };
    let lines = vec![
        row("Patient ID", session.patient_id.to_string()),
        row("Date", session.local_timestamp()),
        row("Diagnosis", session.diagnosis.clone().unwrap_or_default()),
        row("Treatment", session.treatment_plan.clone().unwrap_or_default()),
    ];
    let block = Block::default()
        .title(" Session Details ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
