//! # Mock Transport & Testing Guide
//!
//! `MockTransport` implements [`HttpTransport`] entirely in memory. Queue the
//! responses you expect, hand [`MockTransport::transport`] to a
//! [`ProductClient`](crate::clients::ProductClient), and assert on the recorded
//! requests afterwards.
//!
//! | Feature | MockTransport | ReqwestTransport |
//! |---------|---------------|------------------|
//! | **Speed** | Instant (in-memory) | Real socket round trip |
//! | **Determinism** | Expectations served in order | Subject to the network |
//! | **Error Injection** | Easy (`return_err`) | Hard (needs a broken server) |
//!
//! ```rust
//! use product_console::clients::ProductClient;
//! use product_console::config::ClientConfig;
//! use product_console::mock::MockTransport;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect_get("http://127.0.0.1:8000/product/list?page=1")
//!         .return_json(200, serde_json::json!([]));
//!
//!     let client = ProductClient::new(ClientConfig::default(), mock.transport());
//!     assert!(client.list(1).await.unwrap().is_empty());
//!     mock.verify();
//! }
//! ```

use crate::clients::transport::{ApiRequest, ApiResponse, HttpTransport, Method, TransportError};
use crate::render::Notifier;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

struct Expectation {
    method: Method,
    url: String,
    delay: Option<Duration>,
    response: Result<ApiResponse, TransportError>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    requests: Vec<ApiRequest>,
}

/// An in-memory transport with expectation tracking.
///
/// Expectations are served strictly in the order they were queued. A request
/// whose method or URL does not match the next expectation panics, as does a
/// request arriving when nothing is queued.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the transport for use in a client.
    pub fn transport(&self) -> Arc<dyn HttpTransport> {
        Arc::new(self.clone())
    }

    /// Expects a `GET` to `url`.
    pub fn expect_get(&self, url: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::Get, url)
    }

    /// Expects a `POST` to `url`.
    pub fn expect_post(&self, url: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::Post, url)
    }

    fn expect(&self, method: Method, url: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            url: url.into(),
            delay: None,
            state: self.state.clone(),
        }
    }

    /// Every request seen so far, in arrival order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let expectation = {
            let mut state = self.state.lock().unwrap();
            state.requests.push(request.clone());
            state.expectations.pop_front()
        };

        let Some(expectation) = expectation else {
            panic!("Unexpected request: {} {}", request.method, request.url);
        };
        if expectation.method != request.method || expectation.url != request.url {
            panic!(
                "Expectation mismatch: expected {} {}, got {} {}",
                expectation.method, expectation.url, request.method, request.url
            );
        }

        if let Some(delay) = expectation.delay {
            tokio::time::sleep(delay).await;
        }
        expectation.response
    }
}

/// Builder for a single queued response.
pub struct ExpectationBuilder {
    method: Method,
    url: String,
    delay: Option<Duration>,
    state: Arc<Mutex<MockState>>,
}

impl ExpectationBuilder {
    /// Hold the response back for `delay` before resolving.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Responds with `status` and a JSON body.
    pub fn return_json(self, status: u16, body: serde_json::Value) {
        let bytes = body.to_string().into_bytes();
        self.push(Ok(ApiResponse::new(status, bytes)));
    }

    /// Responds with `status` and a body sent verbatim.
    pub fn return_raw(self, status: u16, body: &str) {
        self.push(Ok(ApiResponse::new(status, body.as_bytes().to_vec())));
    }

    /// Fails below the HTTP layer.
    pub fn return_err(self, error: TransportError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<ApiResponse, TransportError>) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation {
            method: self.method,
            url: self.url,
            delay: self.delay,
            response,
        });
    }
}

// =============================================================================
// NOTIFIER
// =============================================================================

/// A [`Notifier`] that records every alert instead of showing it.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_expectations_in_order() {
        let mock = MockTransport::new();
        mock.expect_get("http://h/a").return_raw(200, "a");
        mock.expect_get("http://h/b").return_err(TransportError::Network("down".to_string()));

        let transport = mock.transport();
        let first = transport.execute(ApiRequest::get("http://h/a")).await.unwrap();
        assert_eq!(first.body, b"a".to_vec());
        let second = transport.execute(ApiRequest::get("http://h/b")).await;
        assert!(second.is_err());

        assert_eq!(mock.requests().len(), 2);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Expectation mismatch")]
    async fn test_mismatch_panics() {
        let mock = MockTransport::new();
        mock.expect_post("http://h/add").return_raw(200, "{}");
        let _ = mock.transport().execute(ApiRequest::get("http://h/add")).await;
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_reports_leftovers() {
        let mock = MockTransport::new();
        mock.expect_get("http://h/a").return_raw(200, "");
        mock.verify();
    }

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.alert("one");
        notifier.alert("two");
        assert_eq!(notifier.alerts(), vec!["one", "two"]);
    }
}
