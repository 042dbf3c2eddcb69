//! The request primitive and its two transports.
//!
//! Operations describe a call as a [`Request`]; a transport executes it and
//! hands back the decoded [`RawResponse`]. [`Transport`] blocks the calling
//! thread, [`AsyncTransport`] returns a future. Both facades build requests
//! with the same code, so for the same input they send identical bytes.

mod blocking;
mod nonblocking;

pub use blocking::BlockingHttpTransport;
pub use nonblocking::HttpTransport;

use std::future::Future;

use reqwest::{Method, StatusCode};
use shipstation_core::Payload;
use url::Url;

use crate::config::ClientConfig;
use crate::error::TransportError;

/// `content-type` sent with every POST and PUT.
pub(crate) const JSON_CONTENT_TYPE: &str = "application/json";

/// One API call: method, path, query string, and an already-serialized body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Path relative to the API origin, e.g. `/orders/list`.
    pub path: String,
    pub query: Vec<(String, String)>,
    /// JSON text for POST and PUT.
    pub body: Option<String>,
}

impl Request {
    fn new(method: Method, path: impl Into<String>, body: Option<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path, None)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path, None)
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: String) -> Self {
        Self::new(Method::POST, path, Some(body))
    }

    #[must_use]
    pub fn put(path: impl Into<String>, body: String) -> Self {
        Self::new(Method::PUT, path, Some(body))
    }

    /// Append query parameters.
    #[must_use]
    pub fn with_query<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Whether the request carries a JSON body header.
    #[must_use]
    pub fn sends_json(&self) -> bool {
        self.method == Method::POST || self.method == Method::PUT
    }

    /// Absolute URL for this request under the configured origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the origin and path do not form a valid URL.
    pub fn url(&self, config: &ClientConfig) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&config.endpoint(&self.path))?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

/// A completed exchange: status and decoded body, uninterpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub payload: Payload,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Turn a non-2xx response into an error, passing 2xx through.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Status`] carrying the status and body.
    pub fn error_for_status(self) -> Result<Self, TransportError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(TransportError::Status {
                status: self.status,
                payload: self.payload,
            })
        }
    }
}

/// Executes requests on the calling thread.
pub trait Transport {
    /// Send one request. Non-success statuses are not errors here.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the request could not be completed.
    fn send(&self, request: Request) -> Result<RawResponse, TransportError>;
}

/// Executes requests without blocking.
pub trait AsyncTransport: Send + Sync {
    /// Send one request. Non-success statuses are not errors here.
    fn send(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// Record an exchange: at `info` when the client is in debug mode, otherwise
/// at `trace`.
pub(crate) fn log_exchange(debug: bool, method: &Method, url: &Url, response: &RawResponse) {
    if debug {
        tracing::info!(
            method = %method,
            url = %url,
            status = response.status.as_u16(),
            payload = ?response.payload,
            "ShipStation request"
        );
    } else {
        tracing::trace!(
            method = %method,
            url = %url,
            status = response.status.as_u16(),
            "ShipStation request"
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new(Some("key"), Some("secret")).unwrap()
    }

    #[test]
    fn test_url_with_query() {
        let request = Request::get("/carriers/getcarrier").with_query([("carrierCode", "fedex")]);
        assert_eq!(
            request.url(&config()).unwrap().as_str(),
            "https://ssapi.shipstation.com/carriers/getcarrier?carrierCode=fedex"
        );
    }

    #[test]
    fn test_url_without_query_has_no_question_mark() {
        let request = Request::get("/warehouses");
        assert_eq!(
            request.url(&config()).unwrap().as_str(),
            "https://ssapi.shipstation.com/warehouses"
        );
    }

    #[test]
    fn test_query_values_are_encoded() {
        let request = Request::get("/orders/list").with_query([("customerName", "Jane Doe & Co")]);
        assert_eq!(
            request.url(&config()).unwrap().query(),
            Some("customerName=Jane+Doe+%26+Co")
        );
    }

    #[test]
    fn test_error_for_status() {
        let ok = RawResponse {
            status: StatusCode::CREATED,
            payload: Payload::Empty,
        };
        assert_eq!(ok.clone().error_for_status().unwrap(), ok);

        let rejected = RawResponse {
            status: StatusCode::NOT_FOUND,
            payload: Payload::Text("missing".to_owned()),
        };
        assert!(matches!(
            rejected.error_for_status(),
            Err(TransportError::Status { status: StatusCode::NOT_FOUND, .. })
        ));
    }

    #[test]
    fn test_json_methods() {
        assert!(Request::post("/x", "{}".to_string()).sends_json());
        assert!(Request::put("/x", "{}".to_string()).sends_json());
        assert!(!Request::get("/x").sends_json());
        assert!(!Request::delete("/x").sends_json());
    }
}
