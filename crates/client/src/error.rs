//! Client error types.

use reqwest::StatusCode;
use shipstation_core::{MappingError, Payload};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors reported by the HTTP layer.
///
/// These are passed through unchanged; nothing is retried.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection failure, timeout, or other request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL and request path do not form a valid URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A non-success status, raised only on request through
    /// [`RawResponse::error_for_status`](crate::RawResponse::error_for_status).
    #[error("API error: {status}")]
    Status {
        status: StatusCode,
        /// Decoded response body.
        payload: Payload,
    },
}

/// Any error a facade operation can return.
#[derive(Debug, Error)]
pub enum ShipStationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Input was rejected before a request was built.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ShipStationError {
    /// HTTP status of a rejected request, if that is what this error is.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(TransportError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}
