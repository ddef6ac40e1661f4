//! Wire types shared by the API client and the screens.

mod patient;
mod session;

pub use patient::{NewPatient, Patient};
pub use session::{CreateSessionRequest, FeedbackRequest, Session, SessionUpdate};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Body returned by the service root, used as a reachability probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceStatus {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub message: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub status: String,
}

impl ServiceStatus {
    pub fn is_running(&self) -> bool {
        self.status.eq_ignore_ascii_case("running")
    }
}

/// Helper to deserialize a string that may be null (treats null as empty string)
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Helper to deserialize a timestamp with or without an offset.
///
/// Offset-less timestamps are taken as UTC.
pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| D::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
}
