use tracing::debug;

use crate::api::{ApiClient, ApiResult};
use crate::models::{NewPatient, Patient, Session, SessionUpdate};

/// An API call requested by a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchPatients,
    CreatePatient(NewPatient),
    CreateSession { patient_id: i64 },
    /// Fetch a session and, when it references one, its patient
    LoadSession { session_id: i64 },
    UpdateSession { session_id: i64, update: SessionUpdate },
    FetchSessions,
    SubmitFeedback { session_id: i64, feedback: String },
}

/// A session together with the patient it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionBundle {
    pub session: Session,
    pub patient: Option<Patient>,
}

/// The settled result of a [`Command`].
#[derive(Debug)]
pub enum Outcome {
    PatientsLoaded(ApiResult<Vec<Patient>>),
    PatientCreated(ApiResult<Patient>),
    SessionCreated(ApiResult<Session>),
    SessionLoaded(ApiResult<SessionBundle>),
    SessionSaved(ApiResult<Session>),
    SessionsLoaded(ApiResult<Vec<Session>>),
    FeedbackSubmitted(ApiResult<()>),
}

impl Command {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::FetchPatients => "fetch_patients",
            Command::CreatePatient(_) => "create_patient",
            Command::CreateSession { .. } => "create_session",
            Command::LoadSession { .. } => "load_session",
            Command::UpdateSession { .. } => "update_session",
            Command::FetchSessions => "fetch_sessions",
            Command::SubmitFeedback { .. } => "submit_feedback",
        }
    }

    /// Run the command against the service.
    pub async fn execute(self, api: &ApiClient) -> Outcome {
        debug!("Executing command {}", self.name());
        match self {
            Command::FetchPatients => Outcome::PatientsLoaded(api.get_patients().await),
            Command::CreatePatient(patient) => {
                Outcome::PatientCreated(api.create_patient(&patient).await)
            }
            Command::CreateSession { patient_id } => {
                Outcome::SessionCreated(api.create_session(patient_id).await)
            }
            Command::LoadSession { session_id } => {
                Outcome::SessionLoaded(load_session(api, session_id).await)
            }
            Command::UpdateSession { session_id, update } => {
                Outcome::SessionSaved(api.update_session(session_id, &update).await)
            }
            Command::FetchSessions => Outcome::SessionsLoaded(api.get_sessions().await),
            Command::SubmitFeedback {
                session_id,
                feedback,
            } => Outcome::FeedbackSubmitted(api.submit_feedback(session_id, &feedback).await),
        }
    }
}

/// Session first, then its patient; either failure fails the whole load.
async fn load_session(api: &ApiClient, session_id: i64) -> ApiResult<SessionBundle> {
    let session = api.get_session(session_id).await?;
    let patient = match session.patient_ref() {
        Some(patient_id) => Some(api.get_patient(patient_id).await?),
        None => None,
    };
    Ok(SessionBundle { session, patient })
}
