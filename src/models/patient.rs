use serde::{Deserialize, Serialize};

use super::deserialize_nullable_string;

/// A patient record as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patient {
    /// Server-assigned identifier
    pub id: i64,
    pub name: String,
    pub age: i64,
    /// Free-text history; the service may send null for "none recorded"
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub medical_history: String,
}

/// A patient that has not been stored yet (no id).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub age: i64,
    pub medical_history: String,
}

impl NewPatient {
    pub fn new(name: impl Into<String>, age: i64, medical_history: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            medical_history: medical_history.into(),
        }
    }
}
