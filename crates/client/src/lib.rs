//! ShipStation Client - Blocking and async facades over the ShipStation API.
//!
//! Each remote operation is validated and shaped by [`operations`], sent by a
//! transport, and parsed back into `shipstation-core` entities. The two
//! facades share the operation code, so the same input produces the same
//! request bytes whichever one is used.
//!
//! # Modules
//!
//! - [`config`] - credentials, base URL, timeout, debug flag
//! - [`transport`] - the request primitive and its reqwest implementations
//! - [`operations`] - request builders and response parsers
//! - [`batch`] - orders queued for submission
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_client::{ClientConfig, ShipStationClient};
//! use shipstation_core::Params;
//!
//! let client = ShipStationClient::new(ClientConfig::from_env()?)?;
//! let carriers = client.list_carriers().await?;
//! let page = client
//!     .fetch_orders(&Params::new().with("order_status", "awaiting_shipment"))
//!     .await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod batch;
pub mod blocking;
pub mod client;
pub mod config;
pub mod error;
pub mod operations;
pub mod transport;

pub use batch::OrderBatch;
pub use blocking::BlockingShipStationClient;
pub use client::ShipStationClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{ShipStationError, TransportError};
pub use transport::{
    AsyncTransport, BlockingHttpTransport, HttpTransport, RawResponse, Request, Transport,
};
