//! Patient list with per-patient "start session" and patient registration.

use tracing::{error, info, warn};

use super::{Command, Effect, Outcome};
use crate::models::{NewPatient, Patient};
use crate::route::Route;
use crate::widgets::TextField;

pub const FETCH_PATIENTS_FAILED: &str = "Failed to fetch patients";
pub const CREATE_SESSION_FAILED: &str = "Failed to create session";
pub const CREATE_PATIENT_FAILED: &str = "Failed to create patient";
pub const NAME_REQUIRED: &str = "Name is required";
pub const AGE_INVALID: &str = "Age must be a whole number";

/// Field of the registration form that receives typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationField {
    #[default]
    Name,
    Age,
    MedicalHistory,
}

impl RegistrationField {
    pub fn next(self) -> Self {
        match self {
            RegistrationField::Name => RegistrationField::Age,
            RegistrationField::Age => RegistrationField::MedicalHistory,
            RegistrationField::MedicalHistory => RegistrationField::Name,
        }
    }
}

/// Draft of a new patient.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: TextField,
    pub age: TextField,
    pub medical_history: TextField,
    pub focus: RegistrationField,
    pub submitting: bool,
    pub error: Option<String>,
}

impl RegistrationForm {
    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            RegistrationField::Name => &mut self.name,
            RegistrationField::Age => &mut self.age,
            RegistrationField::MedicalHistory => &mut self.medical_history,
        }
    }

    /// Check required fields and build the request body.
    pub fn validate(&self) -> Result<NewPatient, &'static str> {
        let name = self.name.content().trim();
        if name.is_empty() {
            return Err(NAME_REQUIRED);
        }
        let age = self
            .age
            .content()
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|age| *age >= 0)
            .ok_or(AGE_INVALID)?;
        Ok(NewPatient::new(
            name,
            age,
            self.medical_history.content().trim(),
        ))
    }
}

#[derive(Debug, Clone)]
pub struct DashboardPage {
    pub patients: Vec<Patient>,
    pub loading: bool,
    pub error: Option<String>,
    /// Cursor into `patients`
    pub selected: usize,
    /// Patient whose session creation is in flight
    pub starting_session: Option<i64>,
    pub registration: Option<RegistrationForm>,
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            patients: Vec::new(),
            loading: true,
            error: None,
            selected: 0,
            starting_session: None,
            registration: None,
        }
    }

    /// Begin (or repeat) the patient fetch.
    pub fn fetch(&mut self) -> Command {
        self.loading = true;
        self.error = None;
        Command::FetchPatients
    }

    /// Retry after a failure; ignored unless an error is showing.
    pub fn retry(&mut self) -> Option<Command> {
        if self.error.is_some() && !self.loading {
            Some(self.fetch())
        } else {
            None
        }
    }

    pub fn selected_patient(&self) -> Option<&Patient> {
        self.patients.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.patients.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Ask the service for a new session for `patient_id`.
    pub fn start_session(&mut self, patient_id: i64) -> Option<Command> {
        if self.loading || self.starting_session.is_some() {
            return None;
        }
        self.starting_session = Some(patient_id);
        Some(Command::CreateSession { patient_id })
    }

    pub fn start_selected_session(&mut self) -> Option<Command> {
        let patient_id = self.selected_patient()?.id;
        self.start_session(patient_id)
    }

    pub fn open_registration(&mut self) {
        if self.registration.is_none() {
            self.registration = Some(RegistrationForm::default());
        }
    }

    pub fn close_registration(&mut self) {
        self.registration = None;
    }

    /// Submit the registration draft if it is complete.
    pub fn submit_registration(&mut self) -> Option<Command> {
        let form = self.registration.as_mut()?;
        if form.submitting {
            return None;
        }
        match form.validate() {
            Ok(patient) => {
                form.submitting = true;
                form.error = None;
                Some(Command::CreatePatient(patient))
            }
            Err(message) => {
                form.error = Some(message.to_string());
                None
            }
        }
    }

    pub fn apply(&mut self, outcome: Outcome) -> Effect {
        match outcome {
            Outcome::PatientsLoaded(result) => {
                match result {
                    Ok(patients) => {
                        self.patients = patients;
                        if self.selected >= self.patients.len() {
                            self.selected = self.patients.len().saturating_sub(1);
                        }
                    }
                    Err(err) => {
                        error!("Error fetching patients: {}", err);
                        self.error = Some(FETCH_PATIENTS_FAILED.to_string());
                    }
                }
                self.loading = false;
                Effect::None
            }
            Outcome::SessionCreated(result) => {
                self.starting_session = None;
                match result {
                    Ok(session) => {
                        info!("Created session {} for patient {}", session.id, session.patient_id);
                        Effect::Navigate(Route::SessionDetail(session.id))
                    }
                    Err(err) => {
                        error!("Error creating session: {}", err);
                        self.error = Some(CREATE_SESSION_FAILED.to_string());
                        Effect::None
                    }
                }
            }
            Outcome::PatientCreated(result) => match result {
                Ok(patient) => {
                    info!("Registered patient {}", patient.id);
                    self.registration = None;
                    Effect::Dispatch(self.fetch())
                }
                Err(err) => {
                    error!("Error creating patient: {}", err);
                    if let Some(form) = self.registration.as_mut() {
                        form.submitting = false;
                        form.error = Some(CREATE_PATIENT_FAILED.to_string());
                    }
                    Effect::None
                }
            },
            other => {
                warn!("Dashboard ignoring unrelated outcome: {:?}", other);
                Effect::None
            }
        }
    }
}
