//! Editing diagnosis and treatment plan for a single session.

use tracing::{error, info, warn};

use super::{Banner, Command, Effect, Outcome, SessionBundle};
use crate::models::{Patient, Session, SessionUpdate};
use crate::widgets::TextField;

pub const LOAD_FAILED: &str = "Failed to load session data";
pub const UPDATE_SUCCEEDED: &str = "Session updated successfully!";
pub const UPDATE_FAILED: &str = "Failed to update session";
pub const FIELDS_REQUIRED: &str = "Diagnosis and treatment plan are required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionField {
    #[default]
    Diagnosis,
    TreatmentPlan,
}

#[derive(Debug, Clone)]
pub struct SessionPage {
    pub session_id: i64,
    pub session: Option<Session>,
    pub patient: Option<Patient>,
    pub diagnosis: TextField,
    pub treatment_plan: TextField,
    pub focus: SessionField,
    pub loading: bool,
    pub saving: bool,
    pub message: Option<Banner>,
}

impl SessionPage {
    pub fn new(session_id: i64) -> Self {
        Self {
            session_id,
            session: None,
            patient: None,
            diagnosis: TextField::new(),
            treatment_plan: TextField::new(),
            focus: SessionField::default(),
            loading: true,
            saving: false,
            message: None,
        }
    }

    pub fn load(&mut self) -> Command {
        self.loading = true;
        Command::LoadSession {
            session_id: self.session_id,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SessionField::Diagnosis => SessionField::TreatmentPlan,
            SessionField::TreatmentPlan => SessionField::Diagnosis,
        };
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            SessionField::Diagnosis => &mut self.diagnosis,
            SessionField::TreatmentPlan => &mut self.treatment_plan,
        }
    }

    pub fn can_save(&self) -> bool {
        self.session.is_some() && !self.saving && !self.loading
    }

    /// Send both fields to the service.
    pub fn save(&mut self) -> Option<Command> {
        if !self.can_save() {
            return None;
        }
        if self.diagnosis.content().is_empty() || self.treatment_plan.content().is_empty() {
            self.message = Some(Banner::error(FIELDS_REQUIRED));
            return None;
        }
        let session_id = self.session.as_ref()?.id;
        self.saving = true;
        Some(Command::UpdateSession {
            session_id,
            update: SessionUpdate::both(self.diagnosis.content(), self.treatment_plan.content()),
        })
    }

    pub fn apply(&mut self, outcome: Outcome) -> Effect {
        match outcome {
            Outcome::SessionLoaded(result) => {
                match result {
                    Ok(SessionBundle { session, patient }) => {
                        self.diagnosis
                            .set_content(session.diagnosis.as_deref().unwrap_or_default());
                        self.treatment_plan
                            .set_content(session.treatment_plan.as_deref().unwrap_or_default());
                        self.session = Some(session);
                        self.patient = patient;
                    }
                    Err(err) => {
                        error!("Error fetching session data: {}", err);
                        self.session = None;
                        self.patient = None;
                        self.message = Some(Banner::error(LOAD_FAILED));
                    }
                }
                self.loading = false;
                self.saving = false;
                Effect::None
            }
            Outcome::SessionSaved(result) => match result {
                Ok(session) => {
                    info!("Updated session {}", session.id);
                    self.message = Some(Banner::success(UPDATE_SUCCEEDED));
                    Effect::Dispatch(self.load())
                }
                Err(err) => {
                    error!("Error updating session: {}", err);
                    self.message = Some(Banner::error(UPDATE_FAILED));
                    self.saving = false;
                    Effect::None
                }
            },
            other => {
                warn!("Session page ignoring unrelated outcome: {:?}", other);
                Effect::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use serde_json::json;

    fn session(diagnosis: Option<&str>, treatment_plan: Option<&str>) -> Session {
        serde_json::from_value(json!({
            "id": 7,
            "patient_id": 1,
            "timestamp": "2024-01-01T00:00:00Z",
            "diagnosis": diagnosis,
            "treatment_plan": treatment_plan,
        }))
        .unwrap()
    }

    fn ann() -> Patient {
        Patient {
            id: 1,
            name: "Ann".to_string(),
            age: 40,
            medical_history: "none".to_string(),
        }
    }

    fn loaded(diagnosis: Option<&str>, treatment_plan: Option<&str>) -> SessionPage {
        let mut page = SessionPage::new(7);
        page.load();
        page.apply(Outcome::SessionLoaded(Ok(SessionBundle {
            session: session(diagnosis, treatment_plan),
            patient: Some(ann()),
        })));
        page
    }

    fn status_error() -> ApiError {
        ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        }
    }

    #[test]
    fn test_load_requests_bound_session() {
        let mut page = SessionPage::new(7);
        assert!(page.loading);
        assert_eq!(page.load(), Command::LoadSession { session_id: 7 });
    }

    #[test]
    fn test_load_with_unset_fields_leaves_them_empty() {
        let page = loaded(None, None);
        assert!(!page.loading);
        assert_eq!(page.diagnosis.content(), "");
        assert_eq!(page.treatment_plan.content(), "");
        assert_eq!(page.patient, Some(ann()));
    }

    #[test]
    fn test_load_failure_leaves_session_unset() {
        let mut page = SessionPage::new(7);
        page.load();
        page.apply(Outcome::SessionLoaded(Err(status_error())));
        assert!(!page.loading);
        assert!(page.session.is_none());
        assert!(page.patient.is_none());
        assert_eq!(page.message, Some(Banner::error(LOAD_FAILED)));
    }

    #[test]
    fn test_save_sends_both_fields() {
        let mut page = loaded(None, None);
        page.diagnosis.set_content("flu");
        page.treatment_plan.set_content("rest");

        let command = page.save();
        assert_eq!(
            command,
            Some(Command::UpdateSession {
                session_id: 7,
                update: SessionUpdate::both("flu", "rest"),
            })
        );
        assert!(page.saving);
        assert!(page.save().is_none());
    }

    #[test]
    fn test_save_rejects_empty_fields() {
        let mut page = loaded(None, None);
        page.diagnosis.set_content("flu");
        assert!(page.save().is_none());
        assert!(!page.saving);
        assert_eq!(page.message, Some(Banner::error(FIELDS_REQUIRED)));
    }

    #[test]
    fn test_save_without_session_does_nothing() {
        let mut page = SessionPage::new(7);
        page.apply(Outcome::SessionLoaded(Err(status_error())));
        page.diagnosis.set_content("flu");
        page.treatment_plan.set_content("rest");
        assert!(page.save().is_none());
    }

    #[test]
    fn test_save_failure_keeps_typed_text() {
        let mut page = loaded(Some("old"), Some("old plan"));
        page.diagnosis.set_content("flu");
        page.treatment_plan.set_content("rest");
        page.save();

        let effect = page.apply(Outcome::SessionSaved(Err(status_error())));
        assert_eq!(effect, Effect::None);
        assert!(!page.saving);
        assert_eq!(page.diagnosis.content(), "flu");
        assert_eq!(page.treatment_plan.content(), "rest");
        assert_eq!(page.message, Some(Banner::error(UPDATE_FAILED)));
    }

    #[test]
    fn test_save_success_reloads_with_server_values() {
        let mut page = loaded(None, None);
        page.diagnosis.set_content("flu ");
        page.treatment_plan.set_content("rest");
        page.save();

        let effect = page.apply(Outcome::SessionSaved(Ok(session(Some("flu"), Some("rest")))));
        assert_eq!(effect, Effect::Dispatch(Command::LoadSession { session_id: 7 }));
        assert!(page.saving);
        assert_eq!(page.message, Some(Banner::success(UPDATE_SUCCEEDED)));

        page.apply(Outcome::SessionLoaded(Ok(SessionBundle {
            session: session(Some("Influenza"), Some("Bed rest")),
            patient: Some(ann()),
        })));
        assert!(!page.saving);
        assert_eq!(page.diagnosis.content(), "Influenza");
        assert_eq!(page.treatment_plan.content(), "Bed rest");
        assert_eq!(page.message, Some(Banner::success(UPDATE_SUCCEEDED)));
    }

    #[test]
    fn test_toggle_focus() {
        let mut page = loaded(None, None);
        page.focused_field_mut().insert_str("a");
        page.toggle_focus();
        page.focused_field_mut().insert_str("b");
        assert_eq!(page.diagnosis.content(), "a");
        assert_eq!(page.treatment_plan.content(), "b");
    }
}
