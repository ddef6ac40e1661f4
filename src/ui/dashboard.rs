//! Patient dashboard rendering.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::components::{render_dialog_frame, spinner_line, DialogFrameConfig};
use super::layout::{truncate_to_width, LayoutContext};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_LINK,
    COLOR_PENDING, COLOR_SELECTED_BG,
};
use crate::pages::dashboard::{DashboardPage, RegistrationField, RegistrationForm};
use crate::widgets::TextFieldWidget;

pub const EMPTY_TEXT: &str = "No patients found. The database might be empty.";

pub fn render_dashboard(frame: &mut Frame, area: Rect, page: &DashboardPage, tick: u64) {
    if page.loading {
        render_centered(frame, area, spinner_line("Loading patients...", tick));
        return;
    }

    if let Some(error) = &page.error {
        render_error(frame, area, error);
        return;
    }

    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Healthcare Dashboard",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Manage patients and healthcare sessions",
            Style::default().fg(COLOR_DIM),
        )),
    ]);
    frame.render_widget(title, chunks[0]);

    render_patient_list(frame, chunks[1], page);

    if let Some(form) = &page.registration {
        render_registration(frame, area, form);
    }
}

fn render_centered(frame: &mut Frame, area: Rect, line: Line<'static>) {
    let y = area.y + area.height / 2;
    let row = Rect::new(area.x, y, area.width, 1.min(area.height));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let lines = vec![
        Line::from(Span::styled(
            error.to_string(),
            Style::default()
                .fg(COLOR_ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ Retry ]", Style::default().fg(COLOR_LINK)),
            Span::styled("  press r", Style::default().fg(COLOR_DIM)),
        ]),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ERROR));
    let height = (lines.len() as u16 + 2).min(area.height);
    frame.render_widget(
        Paragraph::new(lines).block(block),
        Rect::new(area.x, area.y, area.width, height),
    );
}

fn render_patient_list(frame: &mut Frame, area: Rect, page: &DashboardPage) {
    let block = Block::default()
        .title(Span::styled(
            " Patients ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    if page.patients.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            EMPTY_TEXT,
            Style::default().fg(COLOR_DIM),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Border plus highlight symbol
    let text_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = page
        .patients
        .iter()
        .map(|patient| {
            let action = if page.starting_session == Some(patient.id) {
                Span::styled("  Starting...", Style::default().fg(COLOR_PENDING))
            } else {
                Span::styled("  [ Start Session ]", Style::default().fg(COLOR_LINK))
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        patient.name.clone(),
                        Style::default()
                            .fg(COLOR_HEADER)
                            .add_modifier(Modifier::BOLD),
                    ),
                    action,
                ]),
                Line::from(Span::styled(
                    format!("Age: {}", patient.age),
                    Style::default().fg(COLOR_DIM),
                )),
                Line::from(Span::styled(
                    truncate_to_width(
                        &format!("Medical History: {}", patient.medical_history),
                        text_width,
                    ),
                    Style::default().fg(COLOR_DIM),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(COLOR_SELECTED_BG))
        .highlight_symbol("▌ ");

    let mut state = ListState::default().with_selected(Some(page.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_registration(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let ctx = LayoutContext::from_rect(area);
    let history_height = ctx.field_height();
    let content_height = 3 + 3 + history_height + 2;
    let inner = render_dialog_frame(
        frame,
        area,
        &ctx,
        &DialogFrameConfig::new("Register Patient", content_height).max_width(70),
    );

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(history_height),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    frame.render_widget(
        TextFieldWidget::new(&form.name, "Name", form.focus == RegistrationField::Name)
            .required(true),
        chunks[0],
    );
    frame.render_widget(
        TextFieldWidget::new(&form.age, "Age", form.focus == RegistrationField::Age)
            .required(true),
        chunks[1],
    );
    frame.render_widget(
        TextFieldWidget::new(
            &form.medical_history,
            "Medical History",
            form.focus == RegistrationField::MedicalHistory,
        )
        .placeholder("Optional"),
        chunks[2],
    );

    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(Span::styled(error.clone(), Style::default().fg(COLOR_ERROR)))
                .wrap(Wrap { trim: true }),
            chunks[3],
        );
    }

    let submit = if form.submitting {
        Span::styled("Registering...", Style::default().fg(COLOR_DIM))
    } else {
        Span::styled(
            "[ Register ]",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(submit)), chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Patient;
    use crate::pages::Outcome;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(page: &DashboardPage) -> Buffer {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_dashboard(f, f.area(), page, 0))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn loaded(patients: Vec<Patient>) -> DashboardPage {
        let mut page = DashboardPage::new();
        page.apply(Outcome::PatientsLoaded(Ok(patients)));
        page
    }

    #[test]
    fn test_loading_shows_only_spinner() {
        let text = buffer_text(&draw(&DashboardPage::new()));
        assert!(text.contains("Loading patients..."));
        assert!(!text.contains("Patients"));
    }

    #[test]
    fn test_empty_list_message() {
        let text = buffer_text(&draw(&loaded(vec![])));
        assert!(text.contains(EMPTY_TEXT));
    }

    #[test]
    fn test_patient_rows() {
        let page = loaded(vec![Patient {
            id: 1,
            name: "Ann".to_string(),
            age: 40,
            medical_history: "none".to_string(),
        }]);
        let text = buffer_text(&draw(&page));
        assert!(text.contains("Ann"));
        assert!(text.contains("Age: 40"));
        assert!(text.contains("Medical History: none"));
        assert!(text.contains("[ Start Session ]"));
    }

    #[test]
    fn test_error_shows_retry() {
        let mut page = DashboardPage::new();
        page.apply(Outcome::PatientsLoaded(Err(crate::api::ApiError::Status {
            status: 500,
            body: String::new(),
        })));
        let text = buffer_text(&draw(&page));
        assert!(text.contains("Failed to fetch patients"));
        assert!(text.contains("[ Retry ]"));
    }

    #[test]
    fn test_registration_dialog() {
        let mut page = loaded(vec![]);
        page.open_registration();
        let text = buffer_text(&draw(&page));
        assert!(text.contains("Register Patient"));
        assert!(text.contains("Name *"));
        assert!(text.contains("Age *"));
    }
}
