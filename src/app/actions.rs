//! Keyboard actions for the App.

use crossterm::event::KeyEvent;
use tracing::debug;

use super::App;
use crate::input::Action;
use crate::pages::{Effect, FeedbackFocus, Page, RegistrationField};
use crate::route::Route;
use crate::widgets::TextField;

impl App {
    /// Translate a key press and perform it.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let context = self.input_context();
        if let Some(action) = self.registry.dispatch(key, &context) {
            self.mark_dirty();
            self.perform(action);
        }
    }

    /// Insert pasted text into the focused field, if any.
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(field) = self.focused_field_mut() {
            field.insert_str(text);
            self.mark_dirty();
        }
    }

    /// The text field that receives typing on the mounted screen.
    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match &mut self.page {
            Page::Dashboard(page) => page
                .registration
                .as_mut()
                .map(|form| form.focused_field_mut()),
            Page::Session(page) => {
                if page.session.is_some() && !page.loading {
                    Some(page.focused_field_mut())
                } else {
                    None
                }
            }
            Page::Feedback(page) => {
                if page.focus == FeedbackFocus::Feedback {
                    Some(&mut page.feedback)
                } else {
                    None
                }
            }
        }
    }

    /// Perform a user action against the mounted screen.
    pub fn perform(&mut self, action: Action) {
        debug!("Performing {:?} on {:?}", action, self.screen());
        match action {
            Action::Quit => self.quit(),
            Action::Navigate(route) => self.navigate(route),
            Action::Noop => {}
            action if action.is_editing() => self.edit(action),
            action => {
                let effect = self.page_action(action);
                self.apply_effect(effect);
            }
        }
    }

    fn edit(&mut self, action: Action) {
        if action == Action::InsertNewline {
            // Name and age are single-line; Enter moves on to the next field
            if let Page::Dashboard(page) = &mut self.page {
                if let Some(form) = page.registration.as_mut() {
                    if form.focus != RegistrationField::MedicalHistory {
                        form.focus = form.focus.next();
                        return;
                    }
                }
            }
        }

        let Some(field) = self.focused_field_mut() else {
            return;
        };
        match action {
            Action::InsertChar(c) => field.insert_char(c),
            Action::InsertNewline => field.insert_newline(),
            Action::Backspace => field.backspace(),
            Action::Delete => field.delete_char(),
            Action::CursorLeft => field.move_cursor_left(),
            Action::CursorRight => field.move_cursor_right(),
            Action::CursorHome => field.move_cursor_home(),
            Action::CursorEnd => field.move_cursor_end(),
            _ => {}
        }
    }

    fn page_action(&mut self, action: Action) -> Effect {
        match &mut self.page {
            Page::Dashboard(page) => {
                if page.registration.is_some() {
                    return match action {
                        Action::FocusNext => {
                            if let Some(form) = page.registration.as_mut() {
                                form.focus = form.focus.next();
                            }
                            Effect::None
                        }
                        Action::Submit => page.submit_registration().into(),
                        Action::Cancel => {
                            page.close_registration();
                            Effect::None
                        }
                        _ => Effect::None,
                    };
                }
                // The error view hides the list; only retry is offered there
                if page.error.is_some() {
                    return match action {
                        Action::Retry => page.retry().into(),
                        _ => Effect::None,
                    };
                }
                match action {
                    Action::MoveUp => page.select_previous(),
                    Action::MoveDown => page.select_next(),
                    Action::Activate => return page.start_selected_session().into(),
                    Action::Retry => return page.retry().into(),
                    Action::OpenRegistration => page.open_registration(),
                    _ => {}
                }
                Effect::None
            }
            Page::Session(page) => match action {
                Action::FocusNext => {
                    page.toggle_focus();
                    Effect::None
                }
                Action::Submit => page.save().into(),
                Action::Cancel => Effect::Navigate(Route::Dashboard),
                _ => Effect::None,
            },
            Page::Feedback(page) => {
                match (action, page.focus) {
                    (Action::FocusNext, _) => page.toggle_focus(),
                    (Action::Submit, _) => return page.submit().into(),
                    (Action::MoveUp, FeedbackFocus::Sessions) => page.cursor_up(),
                    (Action::MoveDown, FeedbackFocus::Sessions) => page.cursor_down(),
                    (Action::Activate, FeedbackFocus::Sessions) => {
                        page.select_at_cursor();
                        if page.selected.is_some() {
                            page.focus = FeedbackFocus::Feedback;
                        }
                    }
                    (Action::Cancel, FeedbackFocus::Sessions) => page.clear_selection(),
                    (Action::Cancel, FeedbackFocus::Feedback) => {
                        page.focus = FeedbackFocus::Sessions
                    }
                    _ => {}
                }
                Effect::None
            }
        }
    }
}
