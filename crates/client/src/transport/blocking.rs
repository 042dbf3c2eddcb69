//! Blocking HTTP transport.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use secrecy::ExposeSecret;
use shipstation_core::Payload;

use super::{JSON_CONTENT_TYPE, RawResponse, Request, Transport, log_exchange};
use crate::config::ClientConfig;
use crate::error::TransportError;

/// [`Transport`] over `reqwest::blocking`.
#[derive(Clone)]
pub struct BlockingHttpTransport {
    client: Client,
    config: ClientConfig,
}

impl std::fmt::Debug for BlockingHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingHttpTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl BlockingHttpTransport {
    /// Build a transport with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// The configuration requests are sent with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Transport for BlockingHttpTransport {
    fn send(&self, request: Request) -> Result<RawResponse, TransportError> {
        let url = request.url(&self.config)?;
        let sends_json = request.sends_json();
        let Request { method, body, .. } = request;

        let mut builder = self
            .client
            .request(method.clone(), url.clone())
            .basic_auth(
                &self.config.api_key,
                Some(self.config.api_secret.expose_secret()),
            );
        if sends_json {
            builder = builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status = response.status();
        let bytes = response.bytes()?;

        let raw = RawResponse {
            status,
            payload: Payload::decode(&bytes),
        };
        log_exchange(self.config.debug, &method, &url, &raw);
        Ok(raw)
    }
}
