//! Session detail rendering.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::components::{banner_line, spinner_line};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_LINK};
use crate::models::Patient;
use crate::pages::session_detail::{SessionField, SessionPage};
use crate::widgets::TextFieldWidget;

pub const NOT_FOUND_TEXT: &str = "Session not found";

pub fn render_session(frame: &mut Frame, area: Rect, page: &SessionPage, tick: u64) {
    if page.loading {
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height));
        frame.render_widget(
            Paragraph::new(spinner_line("Loading session...", tick)).alignment(Alignment::Center),
            row,
        );
        return;
    }

    let Some(session) = &page.session else {
        render_not_found(frame, area, page);
        return;
    };

    let ctx = LayoutContext::from_rect(area);
    let field_height = ctx.field_height();
    let patient_height = if page.patient.is_some() { 5 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(if page.message.is_some() { 1 } else { 0 }),
        Constraint::Length(patient_height),
        Constraint::Length(field_height),
        Constraint::Length(field_height),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Healthcare Session #{}", session.id),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            session.local_timestamp(),
            Style::default().fg(COLOR_DIM),
        )),
    ]);
    frame.render_widget(header, chunks[0]);

    if let Some(message) = &page.message {
        frame.render_widget(Paragraph::new(banner_line(message)), chunks[1]);
    }

    if let Some(patient) = &page.patient {
        render_patient(frame, chunks[2], patient);
    }

    frame.render_widget(
        TextFieldWidget::new(
            &page.diagnosis,
            "Diagnosis",
            page.focus == SessionField::Diagnosis,
        )
        .required(true)
        .placeholder("Enter diagnosis..."),
        chunks[3],
    );
    frame.render_widget(
        TextFieldWidget::new(
            &page.treatment_plan,
            "Treatment Plan",
            page.focus == SessionField::TreatmentPlan,
        )
        .required(true)
        .placeholder("Enter treatment plan..."),
        chunks[4],
    );

    let save = if page.saving {
        Span::styled("[ Saving... ]", Style::default().fg(COLOR_DIM))
    } else {
        Span::styled(
            "[ Update Session ]",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    };
    let actions = Line::from(vec![
        save,
        Span::styled(" Ctrl+S", Style::default().fg(COLOR_DIM)),
        Span::raw("   "),
        Span::styled("[ Provide Feedback ]", Style::default().fg(COLOR_LINK)),
        Span::styled(" F2", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(actions), chunks[5]);
}

fn render_patient(frame: &mut Frame, area: Rect, patient: &Patient) {
    let label = Style::default().fg(COLOR_DIM);
    let value = Style::default().fg(COLOR_HEADER);
    let lines = vec![
        Line::from(vec![Span::styled("Name: ", label), Span::styled(patient.name.clone(), value)]),
        Line::from(vec![Span::styled("Age: ", label), Span::styled(patient.age.to_string(), value)]),
        Line::from(vec![
            Span::styled("Medical History: ", label),
            Span::styled(patient.medical_history.clone(), value),
        ]),
    ];
    let block = Block::default()
        .title(" Patient Information ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_not_found(frame: &mut Frame, area: Rect, page: &SessionPage) {
    let mut lines = Vec::new();
    if let Some(message) = &page.message {
        lines.push(banner_line(message));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        NOT_FOUND_TEXT,
        Style::default()
            .fg(COLOR_ERROR)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "← Back to Dashboard (Esc)",
        Style::default().fg(COLOR_LINK),
    )));
    frame.render_widget(Paragraph::new(lines), area);
}
