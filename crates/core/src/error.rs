//! Errors raised by the mapping layer.
//!
//! Every variant is produced before a request is built, so invalid input never
//! reaches the wire.

use thiserror::Error;

use crate::params::ParamKind;

/// Errors that can occur while validating or converting ShipStation objects.
#[derive(Debug, Error)]
pub enum MappingError {
    /// A value of the wrong kind was supplied where a specific type is required.
    #[error("{field} must be of type {expected}, got {found}")]
    TypeMismatch {
        /// Parameter or attribute name.
        field: String,
        /// Kind that was required.
        expected: ParamKind,
        /// Kind that was supplied.
        found: ParamKind,
    },

    /// A required attribute is absent or falsy.
    #[error("'{field}' is a required attribute of {entity}")]
    MissingRequiredField {
        /// Entity (or operation) that requires the field.
        entity: &'static str,
        /// Snake-case field name.
        field: String,
    },

    /// A value is outside its allowed set.
    #[error("'{value}' is not a valid {field}; expected {allowed}")]
    InvalidEnumValue {
        /// Field being assigned.
        field: &'static str,
        /// Rejected value.
        value: String,
        /// Human readable description of the allowed values.
        allowed: String,
    },

    /// A parameter bag contained keys the operation does not recognize.
    #[error("invalid parameters: {}", .keys.join(", "))]
    InvalidParameterKey {
        /// Every unrecognized key, sorted.
        keys: Vec<String>,
    },

    /// JSON text could not be parsed or produced.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A computed quantity does not fit in a decimal.
    #[error("{field} of {entity} is out of range")]
    Overflow {
        entity: &'static str,
        field: &'static str,
    },

    /// A decoded payload did not have the shape the caller asked for.
    #[error("expected {expected}, got {found}")]
    UnexpectedShape {
        /// Shape that was required.
        expected: &'static str,
        /// Shape that was received.
        found: &'static str,
    },
}

impl MappingError {
    /// Shorthand for [`MappingError::MissingRequiredField`].
    #[must_use]
    pub fn missing(entity: &'static str, field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            entity,
            field: field.into(),
        }
    }
}
