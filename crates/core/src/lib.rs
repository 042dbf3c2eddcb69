//! ShipStation Core - Object-to-wire mapping layer.
//!
//! This crate converts ShipStation resources between their typed, snake_case
//! Rust form and the camelCase JSON the ShipStation API speaks. It is used by:
//! - `shipstation-client` - Blocking and async API facades
//! - `shipstation-cli` - Command-line inspection tool
//!
//! # Architecture
//!
//! The core crate contains only types, conversion, and validation - no I/O and
//! no HTTP clients. Every validation error is raised here, before a request is
//! ever built.
//!
//! # Modules
//!
//! - [`naming`] - snake_case / camelCase field-name translation
//! - [`wire`] - field tables, the [`Entity`] conversion contract, decoded payloads
//! - [`models`] - the resource entities (orders, addresses, warehouses, ...)
//! - [`types`] - enumerated wire values (order status, units, customs codes)
//! - [`params`] - open-ended option and filter bags
//! - [`validate`] - type, membership, and parameter-key checks

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod models;
pub mod naming;
pub mod params;
pub mod types;
pub mod validate;
pub mod wire;

pub use error::MappingError;
pub use models::*;
pub use params::{Param, ParamKind, Params};
pub use types::*;
pub use wire::{Entity, Page, Payload, WireObject, WireSource, to_object_list};
