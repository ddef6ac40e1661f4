//! Wire contract of the records service client over reqwest.

mod common;

use common::*;
use std::sync::Arc;

use healthdesk::adapters::ReqwestHttpClient;
use healthdesk::api::{ApiClient, ApiError};
use healthdesk::models::{NewPatient, SessionUpdate};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_patients_decodes_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([ann_json()])))
        .expect(1)
        .mount(&server)
        .await;

    let patients = api_for(&server).get_patients().await.unwrap();
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0].name, "Ann");
    assert_eq!(patients[0].age, 40);
}

#[tokio::test]
async fn test_create_patient_posts_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/patients"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Ann", "age": 40, "medical_history": "none"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ann_json()))
        .expect(1)
        .mount(&server)
        .await;

    let patient = api_for(&server)
        .create_patient(&NewPatient::new("Ann", 40, "none"))
        .await
        .unwrap();
    assert_eq!(patient.id, 1);
}

#[tokio::test]
async fn test_create_session_sends_patient_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(body_json(json!({"patient_id": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_json(None, None)))
        .expect(1)
        .mount(&server)
        .await;

    let session = api_for(&server).create_session(1).await.unwrap();
    assert_eq!(session.id, 7);
    assert_eq!(session.diagnosis, None);
}

#[tokio::test]
async fn test_update_session_puts_both_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/sessions/7"))
        .and(body_json(json!({"diagnosis": "flu", "treatment_plan": "rest"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(session_json(Some("flu"), Some("rest"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = api_for(&server)
        .update_session(7, &SessionUpdate::both("flu", "rest"))
        .await
        .unwrap();
    assert_eq!(session.treatment_plan.as_deref(), Some("rest"));
}

#[tokio::test]
async fn test_submit_feedback_ignores_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions/7/feedback"))
        .and(body_json(json!({"feedback": "improved"})))
        .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    api_for(&server)
        .submit_feedback(7, "improved")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sessions/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Session not found"})))
        .mount(&server)
        .await;

    let err = api_for(&server).get_session(99).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("Session not found"));
}

#[tokio::test]
async fn test_bad_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = api_for(&server).get_patients().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_service_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = ApiClient::new(
        Arc::new(ReqwestHttpClient::new()),
        format!("http://{}", addr),
    );

    let err = api.get_patients().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn test_service_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "running"})))
        .mount(&server)
        .await;

    let status = api_for(&server).service_status().await.unwrap();
    assert!(status.is_running());
}
