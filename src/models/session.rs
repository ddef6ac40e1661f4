use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::deserialize_timestamp;

/// A healthcare encounter tied to one patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Server-assigned identifier
    pub id: i64,
    pub patient_id: i64,
    /// Creation time, set by the server
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub treatment_plan: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
}

impl Session {
    /// The referenced patient id, if the session points at one.
    pub fn patient_ref(&self) -> Option<i64> {
        (self.patient_id > 0).then_some(self.patient_id)
    }

    /// Timestamp in the local zone, date and time.
    pub fn local_timestamp(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }

    /// Timestamp in the local zone, date only.
    pub fn local_date(&self) -> String {
        self.timestamp.with_timezone(&Local).format("%Y-%m-%d").to_string()
    }
}

/// Partial update payload: absent fields are left unchanged by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment_plan: Option<String>,
}

impl SessionUpdate {
    /// An update that overwrites both editable fields.
    pub fn both(diagnosis: impl Into<String>, treatment_plan: impl Into<String>) -> Self {
        Self {
            diagnosis: Some(diagnosis.into()),
            treatment_plan: Some(treatment_plan.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateSessionRequest {
    pub patient_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackRequest {
    pub feedback: String,
}
