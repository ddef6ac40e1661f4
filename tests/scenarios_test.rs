//! End-to-end screen flows against a mock records service.

mod common;

use common::*;
use crossterm::event::KeyCode;
use healthdesk::app::{ServiceHealth, SERVICE_PROBE_INTERVAL_TICKS};
use healthdesk::pages::{feedback, session_detail, BannerKind, FeedbackFocus, Page};
use healthdesk::route::Route;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_get(server: &MockServer, url_path: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_start_session_navigates_to_new_session() {
    let server = MockServer::start().await;
    mount_get(&server, "/patients", json!([ann_json()])).await;
    mount_get(&server, "/sessions/7", session_json(None, None)).await;
    mount_get(&server, "/patients/1", ann_json()).await;
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(body_json(json!({"patient_id": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_json(None, None)))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.navigate(Route::Dashboard);
    assert!(app.page.is_loading());
    settle_until(&mut app, |app| !app.page.is_loading()).await;

    match &app.page {
        Page::Dashboard(page) => {
            assert_eq!(page.patients.len(), 1);
            assert_eq!(page.patients[0].name, "Ann");
        }
        _ => panic!("expected dashboard"),
    }

    press(&mut app, KeyCode::Enter);
    settle_until(&mut app, |app| app.route() == Route::SessionDetail(7)).await;
    assert_eq!(requests_to(&server, "POST", "/sessions").await.len(), 1);
}

#[tokio::test]
async fn test_session_with_unset_fields_loads_patient() {
    let server = MockServer::start().await;
    mount_get(&server, "/sessions/7", session_json(None, None)).await;
    mount_get(&server, "/patients/1", ann_json()).await;

    let mut app = app_for(&server);
    app.navigate(Route::SessionDetail(7));
    settle_until(&mut app, |app| !app.page.is_loading()).await;

    let Page::Session(page) = &app.page else {
        panic!("expected session page");
    };
    assert_eq!(page.diagnosis.content(), "");
    assert_eq!(page.treatment_plan.content(), "");
    assert_eq!(page.patient.as_ref().map(|p| p.name.as_str()), Some("Ann"));
    assert_eq!(requests_to(&server, "GET", "/patients/1").await.len(), 1);
}

#[tokio::test]
async fn test_update_session_then_refetch() {
    let server = MockServer::start().await;
    // First load sees an untouched session, the refetch sees the saved one
    Mock::given(method("GET"))
        .and(path("/sessions/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_json(None, None)))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    mount_get(
        &server,
        "/sessions/7",
        session_json(Some("flu"), Some("rest")),
    )
    .await;
    mount_get(&server, "/patients/1", ann_json()).await;
    Mock::given(method("PUT"))
        .and(path("/sessions/7"))
        .and(body_json(json!({"diagnosis": "flu", "treatment_plan": "rest"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(session_json(Some("flu"), Some("rest"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.navigate(Route::SessionDetail(7));
    settle_until(&mut app, |app| !app.page.is_loading()).await;

    type_text(&mut app, "flu");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "rest");
    ctrl(&mut app, 's');
    assert!(app.is_submitting());

    settle_until(&mut app, |app| !app.is_submitting()).await;

    let Page::Session(page) = &app.page else {
        panic!("expected session page");
    };
    let banner = page.message.as_ref().unwrap();
    assert_eq!(banner.kind, BannerKind::Success);
    assert_eq!(banner.text, session_detail::UPDATE_SUCCEEDED);
    assert_eq!(page.diagnosis.content(), "flu");
    assert_eq!(page.treatment_plan.content(), "rest");
    assert_eq!(requests_to(&server, "GET", "/sessions/7").await.len(), 2);
}

#[tokio::test]
async fn test_failed_update_keeps_typed_values() {
    let server = MockServer::start().await;
    mount_get(&server, "/sessions/7", session_json(Some("cold"), None)).await;
    mount_get(&server, "/patients/1", ann_json()).await;
    Mock::given(method("PUT"))
        .and(path("/sessions/7"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.navigate(Route::SessionDetail(7));
    settle_until(&mut app, |app| !app.page.is_loading()).await;

    type_text(&mut app, " and cough");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "rest");
    ctrl(&mut app, 's');
    settle_until(&mut app, |app| !app.is_submitting()).await;

    let Page::Session(page) = &app.page else {
        panic!("expected session page");
    };
    assert_eq!(page.message.as_ref().unwrap().text, session_detail::UPDATE_FAILED);
    assert_eq!(page.diagnosis.content(), "cold and cough");
    assert_eq!(page.treatment_plan.content(), "rest");
    assert_eq!(requests_to(&server, "GET", "/sessions/7").await.len(), 1);
}

#[tokio::test]
async fn test_feedback_submission_resets_form() {
    let server = MockServer::start().await;
    mount_get(&server, "/sessions", json!([session_json(Some("flu"), Some("rest"))])).await;
    Mock::given(method("POST"))
        .and(path("/sessions/7/feedback"))
        .and(body_json(json!({"feedback": "improved"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.navigate(Route::Feedback);
    settle_until(&mut app, |app| !app.page.is_loading()).await;

    press(&mut app, KeyCode::Enter);
    let Page::Feedback(page) = &app.page else {
        panic!("expected feedback page");
    };
    assert_eq!(page.selected.as_ref().map(|s| s.id), Some(7));
    assert_eq!(page.focus, FeedbackFocus::Feedback);
    // Selecting reads from the fetched list only
    assert_eq!(server.received_requests().await.unwrap().len(), 1);

    type_text(&mut app, "improved");
    ctrl(&mut app, 's');
    settle_until(&mut app, |app| !app.is_submitting()).await;

    let Page::Feedback(page) = &app.page else {
        panic!("expected feedback page");
    };
    assert!(page.selected.is_none());
    assert!(page.feedback.is_empty());
    assert_eq!(page.message.as_ref().unwrap().text, feedback::SUBMIT_SUCCEEDED);
}

#[tokio::test]
async fn test_blank_feedback_is_not_sent() {
    let server = MockServer::start().await;
    mount_get(&server, "/sessions", json!([session_json(None, None)])).await;

    let mut app = app_for(&server);
    app.navigate(Route::Feedback);
    settle_until(&mut app, |app| !app.page.is_loading()).await;

    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "   ");
    ctrl(&mut app, 's');

    assert!(!app.is_submitting());
    assert!(requests_to(&server, "POST", "/sessions/7/feedback")
        .await
        .is_empty());
}

#[tokio::test]
async fn test_stale_outcome_is_dropped_after_navigation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([ann_json()]))
                .set_delay(std::time::Duration::from_millis(200)),
        )
        .mount(&server)
        .await;
    mount_get(&server, "/sessions", json!([])).await;

    let mut app = app_for(&server);
    app.navigate(Route::Dashboard);
    app.navigate(Route::Feedback);
    settle_until(&mut app, |app| !app.page.is_loading()).await;
    assert_eq!(app.route(), Route::Feedback);

    // The late patient list must not disturb the feedback screen
    let late = tokio::time::timeout(std::time::Duration::from_secs(2), app.process_next_message())
        .await
        .unwrap();
    assert!(late);
    assert_eq!(app.route(), Route::Feedback);
    assert!(!app.page.is_loading());
}

#[tokio::test]
async fn test_service_probe_updates_health() {
    let server = MockServer::start().await;
    mount_get(&server, "/", json!({"message": "Healthcare API", "status": "running"})).await;
    mount_get(&server, "/patients", json!([])).await;

    let mut app = app_for(&server);
    assert_eq!(app.service_health, ServiceHealth::Unknown);
    app.start(Route::Dashboard);
    settle_until(&mut app, |app| {
        app.service_health != ServiceHealth::Unknown && !app.page.is_loading()
    })
    .await;
    assert_eq!(app.service_health, ServiceHealth::Online);

    server.reset().await;
    for _ in 0..SERVICE_PROBE_INTERVAL_TICKS {
        app.tick();
    }
    settle_until(&mut app, |app| app.service_health == ServiceHealth::Offline).await;
}
