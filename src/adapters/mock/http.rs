//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that returns scripted responses
//! per method and URL, and records every request it sees.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET, POST or PUT)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST and PUT requests)
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

impl MockResponse {
    /// A 200 response with a JSON body.
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_ok(&value))
    }

    /// A response with the given status and a plain body.
    pub fn status(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, Bytes::from(body.to_string())))
    }

    /// A connection failure.
    pub fn unreachable() -> Self {
        MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string()))
    }
}

type RouteKey = (String, String);

/// Mock HTTP client for testing.
///
/// Responses are scripted per `(method, url)`. A route holds a queue: each
/// request pops the front entry, and the last entry is kept and repeated.
///
/// # Example
///
/// ```ignore
/// use healthdesk::adapters::mock::{MockHttpClient, MockResponse};
/// use healthdesk::traits::{Headers, HttpClient};
///
/// let client = MockHttpClient::new();
/// client.set_response("GET", "http://api/patients", MockResponse::json(serde_json::json!([])));
///
/// let response = client.get("http://api/patients", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Scripted responses by method and exact URL
    responses: Arc<Mutex<HashMap<RouteKey, VecDeque<MockResponse>>>>,
    /// Default response when no route matches
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is scripted for a route with a single response.
    pub fn set_response(&self, method: &str, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        let queue = responses.entry(route_key(method, url)).or_default();
        queue.clear();
        queue.push_back(response);
    }

    /// Append a response to a route's queue.
    pub fn push_response(&self, method: &str, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses
            .entry(route_key(method, url))
            .or_default()
            .push_back(response);
    }

    /// Set a default response for routes without a script.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests seen so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn next_response(&self, method: &str, url: &str) -> Option<MockResponse> {
        let mut responses = self.responses.lock().unwrap();
        if let Some(queue) = responses.get_mut(&route_key(method, url)) {
            if queue.len() > 1 {
                return queue.pop_front();
            }
            if let Some(last) = queue.front() {
                return Some(last.clone());
            }
        }
        self.default_response.lock().unwrap().clone()
    }

    fn respond(&self, method: &str, url: &str) -> Result<Response, HttpError> {
        match self.next_response(method, url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response for {} {}",
                method, url
            ))),
        }
    }
}

fn route_key(method: &str, url: &str) -> RouteKey {
    (method.to_ascii_uppercase(), url.to_string())
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.respond("GET", url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.respond("POST", url)
    }

    async fn put(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("PUT", url, headers, Some(body.to_string()));
        self.respond("PUT", url)
    }
}
