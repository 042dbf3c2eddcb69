//! Enumerated wire values.
//!
//! Each enum knows its allowed wire strings and rejects anything outside them
//! with [`MappingError::InvalidEnumValue`](crate::MappingError::InvalidEnumValue).

pub mod customs;
pub mod status;
pub mod units;

pub use customs::{Contents, NonDelivery};
pub use status::{OrderStatus, WebhookEvent};
pub use units::{DimensionUnit, WeightUnit};
