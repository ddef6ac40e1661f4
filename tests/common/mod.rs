//! Common test utilities for integration tests.
//!
//! Builds an [`App`] against a wiremock server over the real reqwest
//! transport and drives it with key events until it settles.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{json, Value};
use wiremock::{MockServer, Request};

use healthdesk::adapters::ReqwestHttpClient;
use healthdesk::api::ApiClient;
use healthdesk::app::App;

/// Client for the given mock server.
pub fn api_for(server: &MockServer) -> ApiClient {
    ApiClient::new(Arc::new(ReqwestHttpClient::new()), server.uri())
}

/// App for the given mock server; nothing mounted yet.
pub fn app_for(server: &MockServer) -> App {
    App::with_api(api_for(server))
}

/// Handle async messages until `done` holds.
///
/// Panics after five seconds, which means the awaited outcome never came.
pub async fn settle_until<F>(app: &mut App, done: F)
where
    F: Fn(&App) -> bool,
{
    let wait = async move {
        while !done(app) {
            if !app.process_next_message().await {
                break;
            }
        }
    };
    tokio::time::timeout(Duration::from_secs(5), wait)
        .await
        .expect("app did not settle in time");
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn ctrl(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Requests the server received for `method` and `path`.
pub async fn requests_to(server: &MockServer, method: &str, path: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.method.as_str() == method && request.url.path() == path)
        .collect()
}

pub fn ann_json() -> Value {
    json!({"id": 1, "name": "Ann", "age": 40, "medical_history": "none"})
}

pub fn session_json(diagnosis: Option<&str>, treatment_plan: Option<&str>) -> Value {
    let mut session = json!({"id": 7, "patient_id": 1, "timestamp": "2024-01-01T00:00:00Z"});
    if let Some(diagnosis) = diagnosis {
        session["diagnosis"] = json!(diagnosis);
    }
    if let Some(treatment_plan) = treatment_plan {
        session["treatment_plan"] = json!(treatment_plan);
    }
    session
}
