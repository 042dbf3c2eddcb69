//! Validation helpers shared by entities and operations.
//!
//! Required-attribute checks on entities live on
//! [`Entity::require_attribute`](crate::wire::Entity::require_attribute); the
//! helpers here cover dynamic parameter bags and allowed-value sets.

use crate::error::MappingError;
use crate::naming::to_wire_name;
use crate::params::{Param, ParamKind, Params};
use crate::wire::WireObject;

/// Check that an optional parameter, if present, has the expected kind.
///
/// Absence always passes; this guards optional values, it does not check
/// presence.
///
/// # Errors
///
/// Returns [`MappingError::TypeMismatch`] if `value` is present with a
/// different kind.
pub fn require_type(
    field: &str,
    value: Option<&Param>,
    expected: ParamKind,
) -> Result<(), MappingError> {
    match value {
        Some(param) if param.kind() != expected => Err(MappingError::TypeMismatch {
            field: field.to_owned(),
            expected,
            found: param.kind(),
        }),
        _ => Ok(()),
    }
}

/// Check that `value` is one of `allowed`.
///
/// # Errors
///
/// Returns [`MappingError::InvalidEnumValue`] if it is not.
pub fn require_membership(
    field: &'static str,
    value: &str,
    allowed: &[&str],
) -> Result<(), MappingError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(MappingError::InvalidEnumValue {
            field,
            value: value.to_owned(),
            allowed: allowed.join(", "),
        })
    }
}

/// Check that every named parameter is present and truthy.
///
/// # Errors
///
/// Returns [`MappingError::MissingRequiredField`] naming the first missing
/// key, with `context` as the entity.
pub fn require_parameters(
    params: &Params,
    required: &[&str],
    context: &'static str,
) -> Result<(), MappingError> {
    match required.iter().find(|key| !params.is_supplied(key)) {
        Some(key) => Err(MappingError::missing(context, *key)),
        None => Ok(()),
    }
}

/// Reject any key outside `allowed`.
///
/// # Errors
///
/// Returns [`MappingError::InvalidParameterKey`] listing every unrecognized
/// key in sorted order.
pub fn check_parameter_keys(params: &Params, allowed: &[&str]) -> Result<(), MappingError> {
    let invalid: Vec<String> = params
        .keys()
        .filter(|key| !allowed.contains(key))
        .map(str::to_owned)
        .collect();
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(MappingError::InvalidParameterKey { keys: invalid })
    }
}

/// Reject unknown keys, then produce the wire-named, wire-coerced copy.
///
/// # Errors
///
/// Returns [`MappingError::InvalidParameterKey`] listing every unrecognized
/// key, or a serialization error from a nested entity.
pub fn validate_parameters(params: &Params, allowed: &[&str]) -> Result<WireObject, MappingError> {
    check_parameter_keys(params, allowed)?;

    params
        .iter()
        .map(|(key, value)| Ok((to_wire_name(key), value.to_wire()?)))
        .collect()
}
