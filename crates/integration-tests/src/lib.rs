//! Integration tests for the ShipStation client.
//!
//! # Running Tests
//!
//! ```bash
//! # Offline tests (recording transport, no network)
//! cargo test -p shipstation-integration-tests
//!
//! # Live tests against a real account
//! SHIPSTATION_API_KEY=... SHIPSTATION_API_SECRET=... \
//!     cargo test -p shipstation-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `requests` - request shapes and response parsing per operation
//! - `facade_parity` - async and blocking facades send identical requests
//! - `validation` - invalid input is rejected before anything is sent
//! - `batch` - batch submission keeps going after a failure
//! - `live` - `#[ignore]`d tests against the real API

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use reqwest::StatusCode;
use serde_json::Value;
use shipstation_client::{AsyncTransport, RawResponse, Request, Transport, TransportError};
use shipstation_core::Payload;

/// A transport that records every request and answers from a queue.
///
/// When the queue is empty it answers `200 OK` with an empty body. Implements
/// both transport traits, so one instance can back either facade.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<Request>>,
    responses: Mutex<VecDeque<RawResponse>>,
}

impl RecordingTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response, builder style.
    #[must_use]
    pub fn respond_with(self, status: StatusCode, body: Value) -> Self {
        self.push_response(status, Payload::from_value(body));
        self
    }

    /// Queue a response.
    pub fn push_response(&self, status: StatusCode, payload: Payload) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(RawResponse { status, payload });
    }

    /// Every request sent so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<Request> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent request.
    #[must_use]
    pub fn last_request(&self) -> Option<Request> {
        self.requests().pop()
    }

    /// The body of the most recent request, parsed.
    #[must_use]
    pub fn last_body(&self) -> Option<Value> {
        self.last_request()?
            .body
            .and_then(|body| serde_json::from_str(&body).ok())
    }

    fn record(&self, request: Request) -> RawResponse {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(RawResponse {
                status: StatusCode::OK,
                payload: Payload::Empty,
            })
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: Request) -> Result<RawResponse, TransportError> {
        Ok(self.record(request))
    }
}

impl AsyncTransport for RecordingTransport {
    async fn send(&self, request: Request) -> Result<RawResponse, TransportError> {
        Ok(self.record(request))
    }
}
