//! Picking a past session and submitting free-text feedback for it.

use tracing::{error, info, warn};

use super::{Banner, Command, Effect, Outcome};
use crate::models::Session;
use crate::widgets::TextField;

pub const FETCH_SESSIONS_FAILED: &str = "Failed to fetch sessions";
pub const SUBMIT_SUCCEEDED: &str = "Feedback submitted successfully!";
pub const SUBMIT_FAILED: &str = "Failed to submit feedback";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackFocus {
    #[default]
    Sessions,
    Feedback,
}

#[derive(Debug, Clone)]
pub struct FeedbackPage {
    pub sessions: Vec<Session>,
    /// Copy of the chosen entry from `sessions`
    pub selected: Option<Session>,
    /// Highlighted row in the session picker
    pub cursor: usize,
    pub feedback: TextField,
    pub focus: FeedbackFocus,
    pub loading: bool,
    pub submitting: bool,
    pub message: Option<Banner>,
}

impl Default for FeedbackPage {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackPage {
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
            selected: None,
            cursor: 0,
            feedback: TextField::new(),
            focus: FeedbackFocus::default(),
            loading: true,
            submitting: false,
            message: None,
        }
    }

    pub fn fetch(&mut self) -> Command {
        self.loading = true;
        Command::FetchSessions
    }

    /// Choose a session by id; an unknown id clears the choice.
    pub fn select(&mut self, session_id: i64) {
        self.selected = self
            .sessions
            .iter()
            .find(|session| session.id == session_id)
            .cloned();
    }

    pub fn select_at_cursor(&mut self) {
        if let Some(id) = self.sessions.get(self.cursor).map(|session| session.id) {
            self.select(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.sessions.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FeedbackFocus::Sessions => FeedbackFocus::Feedback,
            FeedbackFocus::Feedback => FeedbackFocus::Sessions,
        };
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.feedback.is_blank() && !self.submitting
    }

    pub fn submit(&mut self) -> Option<Command> {
        if !self.can_submit() {
            return None;
        }
        let session_id = self.selected.as_ref()?.id;
        self.submitting = true;
        Some(Command::SubmitFeedback {
            session_id,
            feedback: self.feedback.content().to_string(),
        })
    }

    pub fn apply(&mut self, outcome: Outcome) -> Effect {
        match outcome {
            Outcome::SessionsLoaded(result) => {
                match result {
                    Ok(sessions) => {
                        self.sessions = sessions;
                        self.cursor = self.cursor.min(self.sessions.len().saturating_sub(1));
                    }
                    Err(err) => {
                        error!("Error fetching sessions: {}", err);
                        self.message = Some(Banner::error(FETCH_SESSIONS_FAILED));
                    }
                }
                self.loading = false;
                Effect::None
            }
            Outcome::FeedbackSubmitted(result) => {
                match result {
                    Ok(()) => {
                        info!("Submitted feedback");
                        self.message = Some(Banner::success(SUBMIT_SUCCEEDED));
                        self.feedback.clear();
                        self.selected = None;
                    }
                    Err(err) => {
                        error!("Error submitting feedback: {}", err);
                        self.message = Some(Banner::error(SUBMIT_FAILED));
                    }
                }
                self.submitting = false;
                Effect::None
            }
            other => {
                warn!("Feedback page ignoring unrelated outcome: {:?}", other);
                Effect::None
            }
        }
    }
}
