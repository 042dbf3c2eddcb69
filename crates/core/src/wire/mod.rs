//! Conversion between entities and the ShipStation wire format.
//!
//! Every entity declares its fields once through [`wire_entity!`](crate::wire_entity),
//! which produces a static [`FieldTable`] (built on first use) together with
//! the per-field read and write code. [`Entity`] then supplies the conversion
//! contract on top of that table.

mod field;
mod macros;
mod payload;

use std::borrow::Cow;

use serde_json::Value;

use crate::error::MappingError;
use crate::naming::{to_internal_name, to_wire_name};

pub use field::WireField;
pub use payload::{Page, Payload, to_object_list};

/// A wire-format JSON object: camelCase keys to wire-ready values.
pub type WireObject = serde_json::Map<String, Value>;

/// Static mapping between an entity's internal field names and wire names.
#[derive(Debug)]
pub struct FieldTable {
    entity: &'static str,
    fields: Vec<(&'static str, String)>,
}

impl FieldTable {
    /// Build the table for `entity` from its snake_case field names.
    #[must_use]
    pub fn new(entity: &'static str, internal_names: &[&'static str]) -> Self {
        Self {
            entity,
            fields: internal_names
                .iter()
                .map(|name| (*name, to_wire_name(name)))
                .collect(),
        }
    }

    /// Entity type name, used in error messages.
    #[must_use]
    pub const fn entity(&self) -> &'static str {
        self.entity
    }

    /// Wire name for a declared internal field.
    #[must_use]
    pub fn wire_name(&self, internal: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == internal)
            .map(|(_, wire)| wire.as_str())
    }

    /// Internal field for a wire key.
    ///
    /// Exact matches win; otherwise the key is compared ignoring ASCII case,
    /// which covers the PascalCase and acronym keys some endpoints return
    /// (`IsLabelAPIHook`).
    #[must_use]
    pub fn internal_name(&self, wire: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|(_, name)| name == wire)
            .or_else(|| {
                self.fields
                    .iter()
                    .find(|(_, name)| name.eq_ignore_ascii_case(wire))
            })
            .map(|(internal, _)| *internal)
    }

    /// Declared `(internal, wire)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields
            .iter()
            .map(|(internal, wire)| (*internal, wire.as_str()))
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the entity declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Outcome of assigning one inbound wire value to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRead {
    /// The value was stored.
    Set,
    /// The field exists but the JSON kind does not fit its type.
    Mismatch,
    /// No field with that name.
    Unknown,
}

/// Field-level access generated by [`wire_entity!`](crate::wire_entity).
pub trait Fields {
    /// The entity's static field table.
    fn field_table() -> &'static FieldTable;

    /// Write every declared field into `out` under its wire name.
    ///
    /// # Errors
    ///
    /// Returns an error if a nested value cannot be serialized.
    fn write_fields(&self, out: &mut WireObject) -> Result<(), MappingError> {
        self.write_fields_except(out, &[])
    }

    /// Write every declared field except those named in `skip`. Skipped
    /// fields are not serialized at all.
    ///
    /// # Errors
    ///
    /// Returns an error if a nested value cannot be serialized.
    fn write_fields_except(
        &self,
        out: &mut WireObject,
        skip: &[&str],
    ) -> Result<(), MappingError>;

    /// Assign a raw wire value to the field with the given internal name.
    fn read_field(&mut self, field: &str, value: Value) -> FieldRead;

    /// Truthiness of a declared field, or `None` if the field is unknown.
    fn field_truthy(&self, field: &str) -> Option<bool>;
}

/// Conversion contract shared by every ShipStation entity.
pub trait Entity: Fields + Default {
    /// Convert to a wire object, coercing booleans and numbers to strings and
    /// converting nested entities recursively.
    ///
    /// # Errors
    ///
    /// Returns an error if a nested entity is incomplete (e.g. a weight whose
    /// units were never validated).
    fn to_wire_object(&self) -> Result<WireObject, MappingError> {
        let mut out = WireObject::new();
        self.write_fields(&mut out)?;
        Ok(out)
    }

    /// Serialize to a compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if [`Entity::to_wire_object`] fails.
    fn to_wire_json(&self) -> Result<String, MappingError> {
        Ok(serde_json::to_string(&Value::Object(self.to_wire_object()?))?)
    }

    /// Build an entity from a wire object, JSON text, JSON value, or decoded
    /// response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is not valid JSON or is not an object.
    fn from_wire_object<'a>(source: impl Into<WireSource<'a>>) -> Result<Self, MappingError> {
        let mut entity = Self::default();
        entity.apply_wire_object(source.into().into_object()?);
        Ok(entity)
    }

    /// Assign every key of `object` to the matching field.
    ///
    /// Values are stored as-is when their JSON kind fits the field; keys that
    /// match no field, and values of the wrong kind, are skipped.
    fn apply_wire_object(&mut self, object: WireObject) {
        let table = Self::field_table();
        for (key, value) in object {
            let field = table
                .internal_name(&key)
                .map_or_else(|| Cow::Owned(to_internal_name(&key)), Cow::Borrowed);
            match self.read_field(&field, value) {
                FieldRead::Set => {}
                FieldRead::Mismatch => tracing::debug!(
                    entity = table.entity(),
                    key = %key,
                    "Skipping wire value of unexpected type"
                ),
                FieldRead::Unknown => tracing::debug!(
                    entity = table.entity(),
                    key = %key,
                    "Skipping unknown wire key"
                ),
            }
        }
    }

    /// Fail unless the named field is present and truthy.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MissingRequiredField`] if the field is absent,
    /// empty, zero, false, or not declared on this entity.
    fn require_attribute(&self, name: &str) -> Result<(), MappingError> {
        if self.field_truthy(name) == Some(true) {
            Ok(())
        } else {
            Err(MappingError::missing(Self::field_table().entity(), name))
        }
    }
}

/// Anything an entity can be parsed from.
#[derive(Debug, Clone)]
pub enum WireSource<'a> {
    /// An already-decoded wire object.
    Object(WireObject),
    /// A JSON value expected to hold an object.
    Value(Value),
    /// JSON text expected to hold an object.
    Json(&'a str),
    /// A decoded response body.
    Payload(Payload),
}

impl WireSource<'_> {
    /// Resolve the source to a wire object.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Json`] for unparseable text and
    /// [`MappingError::UnexpectedShape`] when the source is not an object.
    pub fn into_object(self) -> Result<WireObject, MappingError> {
        let payload = match self {
            Self::Object(object) => return Ok(object),
            Self::Value(value) => Payload::from_value(value),
            Self::Json(text) => Payload::from_value(serde_json::from_str(text)?),
            Self::Payload(payload) => payload,
        };
        match payload {
            Payload::Single(object) => Ok(object),
            other => Err(MappingError::UnexpectedShape {
                expected: "object",
                found: other.shape(),
            }),
        }
    }
}

impl From<WireObject> for WireSource<'_> {
    fn from(object: WireObject) -> Self {
        Self::Object(object)
    }
}

impl From<Value> for WireSource<'_> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl<'a> From<&'a str> for WireSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::Json(text)
    }
}

impl From<Payload> for WireSource<'_> {
    fn from(payload: Payload) -> Self {
        Self::Payload(payload)
    }
}
