//! Typed client for the records service.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::error::{ApiError, ApiResult};
use crate::adapters::ReqwestHttpClient;
use crate::config::AppConfig;
use crate::models::{
    CreateSessionRequest, FeedbackRequest, NewPatient, Patient, ServiceStatus, Session,
    SessionUpdate,
};
use crate::traits::{Headers, HttpClient, Response};

/// One method per backend operation, each a single round trip.
///
/// No retries, caching or de-duplication happen here; every non-2xx status,
/// transport failure or undecodable body is returned as an [`ApiError`].
#[derive(Clone)]
pub struct ApiClient {
    /// Base URL for the records service, without a trailing slash
    pub base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client over any transport.
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Build the production client for a configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()), config.base_url.clone())
    }

    // ------------------------------------------------------------------
    // Patients
    // ------------------------------------------------------------------

    pub async fn get_patients(&self) -> ApiResult<Vec<Patient>> {
        self.get_json("/patients").await
    }

    pub async fn get_patient(&self, id: i64) -> ApiResult<Patient> {
        self.get_json(&format!("/patients/{}", id)).await
    }

    pub async fn create_patient(&self, patient: &NewPatient) -> ApiResult<Patient> {
        let response = self.post("/patients", patient).await?;
        decode(&response)
    }

    // ------------------------------------------------------------------
    // Sessions
    // ------------------------------------------------------------------

    pub async fn get_sessions(&self) -> ApiResult<Vec<Session>> {
        self.get_json("/sessions").await
    }

    pub async fn get_session(&self, id: i64) -> ApiResult<Session> {
        self.get_json(&format!("/sessions/{}", id)).await
    }

    pub async fn create_session(&self, patient_id: i64) -> ApiResult<Session> {
        let response = self
            .post("/sessions", &CreateSessionRequest { patient_id })
            .await?;
        decode(&response)
    }

    pub async fn update_session(&self, id: i64, update: &SessionUpdate) -> ApiResult<Session> {
        let url = self.url(&format!("/sessions/{}", id));
        let body = encode(update)?;
        debug!("PUT {}", url);
        let response = self.http.put(&url, &body, &json_headers(true)).await?;
        decode(&ensure_success(response)?)
    }

    /// Attach feedback to a session. Any 2xx counts as success; the body is ignored.
    pub async fn submit_feedback(&self, session_id: i64, feedback: &str) -> ApiResult<()> {
        let request = FeedbackRequest {
            feedback: feedback.to_string(),
        };
        self.post(&format!("/sessions/{}/feedback", session_id), &request)
            .await?;
        Ok(())
    }

    /// Probe the service root.
    pub async fn service_status(&self) -> ApiResult<ServiceStatus> {
        self.get_json("/").await
    }

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.http.get(&url, &json_headers(false)).await?;
        decode(&ensure_success(response)?)
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<Response> {
        let url = self.url(path);
        let body = encode(body)?;
        debug!("POST {}", url);
        let response = self.http.post(&url, &body, &json_headers(true)).await?;
        ensure_success(response)
    }
}

fn json_headers(with_body: bool) -> Headers {
    let mut headers = Headers::new();
    headers.insert("Accept".to_string(), "application/json".to_string());
    if with_body {
        headers.insert("Content-Type".to_string(), "application/json".to_string());
    }
    headers
}

fn encode<B: Serialize>(body: &B) -> ApiResult<String> {
    serde_json::to_string(body).map_err(ApiError::Encode)
}

fn decode<T: DeserializeOwned>(response: &Response) -> ApiResult<T> {
    response.json().map_err(ApiError::Decode)
}

fn ensure_success(response: Response) -> ApiResult<Response> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status,
            body: response.text_lossy(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use serde_json::json;

    const BASE: &str = "http://records.test";

    fn client() -> (ApiClient, MockHttpClient) {
        let mock = MockHttpClient::new();
        (ApiClient::new(Arc::new(mock.clone()), BASE), mock)
    }

    fn session_json(id: i64) -> serde_json::Value {
        json!({"id": id, "patient_id": 1, "timestamp": "2024-01-01T00:00:00Z"})
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = ApiClient::new(Arc::new(MockHttpClient::new()), "http://x/");
        assert_eq!(client.base_url, "http://x");
    }

    #[test]
    fn test_from_config_uses_config_base_url() {
        let config = AppConfig::default().with_base_url("http://127.0.0.1:1234");
        let client = ApiClient::from_config(&config);
        assert_eq!(client.base_url, "http://127.0.0.1:1234");
    }

    #[tokio::test]
    async fn test_get_patients_keeps_server_order() {
        let (client, mock) = client();
        mock.set_response(
            "GET",
            "http://records.test/patients",
            MockResponse::json(json!([
                {"id": 9, "name": "Zed", "age": 50, "medical_history": ""},
                {"id": 1, "name": "Ann", "age": 40, "medical_history": "none"}
            ])),
        );

        let patients = client.get_patients().await.unwrap();
        let ids: Vec<i64> = patients.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 1]);

        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(
            requests[0].headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_get_patient_not_found() {
        let (client, mock) = client();
        mock.set_response(
            "GET",
            "http://records.test/patients/42",
            MockResponse::status(404, r#"{"detail":"Patient not found"}"#),
        );

        let err = client.get_patient(42).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_patient_posts_fields_without_id() {
        let (client, mock) = client();
        mock.set_response(
            "POST",
            "http://records.test/patients",
            MockResponse::json(json!({"id": 3, "name": "Dee", "age": 33, "medical_history": "asthma"})),
        );

        let created = client
            .create_patient(&NewPatient::new("Dee", 33, "asthma"))
            .await
            .unwrap();
        assert_eq!(created.id, 3);

        let request = &mock.get_requests()[0];
        assert_eq!(
            request.json_body(),
            Some(json!({"name": "Dee", "age": 33, "medical_history": "asthma"}))
        );
        assert_eq!(
            request.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_create_session_posts_patient_id() {
        let (client, mock) = client();
        mock.set_response(
            "POST",
            "http://records.test/sessions",
            MockResponse::json(session_json(7)),
        );

        let session = client.create_session(1).await.unwrap();
        assert_eq!(session.id, 7);
        assert!(session.diagnosis.is_none());
        assert_eq!(mock.get_requests()[0].json_body(), Some(json!({"patient_id": 1})));
    }

    #[tokio::test]
    async fn test_update_session_puts_partial_payload() {
        let (client, mock) = client();
        let mut merged = session_json(7);
        merged["diagnosis"] = json!("flu");
        merged["treatment_plan"] = json!("rest");
        mock.set_response(
            "PUT",
            "http://records.test/sessions/7",
            MockResponse::json(merged),
        );

        let session = client
            .update_session(7, &SessionUpdate::both("flu", "rest"))
            .await
            .unwrap();
        assert_eq!(session.diagnosis.as_deref(), Some("flu"));

        let request = &mock.get_requests()[0];
        assert_eq!(request.method, "PUT");
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"diagnosis":"flu","treatment_plan":"rest"}"#)
        );
    }

    #[tokio::test]
    async fn test_submit_feedback_ignores_response_body() {
        let (client, mock) = client();
        mock.set_response(
            "POST",
            "http://records.test/sessions/7/feedback",
            MockResponse::status(200, "not even json"),
        );

        client.submit_feedback(7, "improved").await.unwrap();
        assert_eq!(
            mock.get_requests()[0].json_body(),
            Some(json!({"feedback": "improved"}))
        );
    }

    #[tokio::test]
    async fn test_submit_feedback_server_error() {
        let (client, mock) = client();
        mock.set_response(
            "POST",
            "http://records.test/sessions/7/feedback",
            MockResponse::status(500, "Internal Server Error"),
        );

        let err = client.submit_feedback(7, "improved").await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let (client, mock) = client();
        mock.set_default_response(MockResponse::unreachable());

        let err = client.get_sessions().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_decode_error() {
        let (client, mock) = client();
        mock.set_response(
            "GET",
            "http://records.test/sessions/1",
            MockResponse::json(json!({"unexpected": true})),
        );

        let err = client.get_session(1).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_service_status_hits_root() {
        let (client, mock) = client();
        mock.set_response(
            "GET",
            "http://records.test/",
            MockResponse::json(json!({"message": "Healthcare Web App API", "status": "running"})),
        );

        let status = client.service_status().await.unwrap();
        assert!(status.is_running());
    }

    #[tokio::test]
    async fn test_each_call_is_one_round_trip() {
        let (client, mock) = client();
        mock.set_default_response(MockResponse::status(503, "down"));

        let _ = client.get_sessions().await;
        let _ = client.get_session(1).await;
        let _ = client.create_session(1).await;
        assert_eq!(mock.request_count(), 3);
    }
}
