//! Decoded response bodies.
//!
//! A body is classified exactly once, when it is decoded, so code further down
//! never has to re-inspect whether it is holding one object or a list.

use serde_json::Value;

use super::{Entity, WireObject};
use crate::error::MappingError;

/// A decoded response body, tagged by shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    /// No body (or JSON `null`).
    #[default]
    Empty,
    /// A single JSON object.
    Single(WireObject),
    /// A JSON array.
    Collection(Vec<Value>),
    /// A bare JSON scalar (string, number, boolean).
    Scalar(Value),
    /// A body that was not valid JSON.
    Text(String),
}

impl Payload {
    /// Decode raw body bytes.
    #[must_use]
    pub fn decode(bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Self::Empty;
        }
        serde_json::from_slice::<Value>(bytes).map_or_else(
            |_| Self::Text(String::from_utf8_lossy(bytes).into_owned()),
            Self::from_value,
        )
    }

    /// Classify an already-decoded JSON value.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::Object(object) => Self::Single(object),
            Value::Array(items) => Self::Collection(items),
            scalar @ (Value::Bool(_) | Value::Number(_) | Value::String(_)) => Self::Scalar(scalar),
        }
    }

    /// Short name of the shape, for error messages.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Empty => "empty body",
            Self::Single(_) => "object",
            Self::Collection(_) => "list",
            Self::Scalar(_) => "scalar",
            Self::Text(_) => "non-JSON text",
        }
    }

    /// Convert back into a JSON value (text bodies become JSON strings).
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Empty => Value::Null,
            Self::Single(object) => Value::Object(object),
            Self::Collection(items) => Value::Array(items),
            Self::Scalar(value) => value,
            Self::Text(text) => Value::String(text),
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<WireObject> for Payload {
    fn from(object: WireObject) -> Self {
        Self::Single(object)
    }
}

impl From<Vec<Value>> for Payload {
    fn from(items: Vec<Value>) -> Self {
        Self::Collection(items)
    }
}

/// Build a list of entities from a decoded body.
///
/// A single object is treated as a one-element list; a list yields one entity
/// per element in input order; an empty body yields an empty list.
///
/// # Errors
///
/// Returns [`MappingError::UnexpectedShape`] for scalar or non-JSON bodies, or
/// for list elements that are not objects.
pub fn to_object_list<T: Entity>(source: impl Into<Payload>) -> Result<Vec<T>, MappingError> {
    match source.into() {
        Payload::Empty => Ok(Vec::new()),
        Payload::Single(object) => Ok(vec![T::from_wire_object(object)?]),
        Payload::Collection(items) => items.into_iter().map(T::from_wire_object).collect(),
        other => Err(MappingError::UnexpectedShape {
            expected: "object or list",
            found: other.shape(),
        }),
    }
}

/// One page of a list endpoint.
///
/// ShipStation wraps list results in an envelope such as
/// `{"orders": [...], "total": 120, "page": 1, "pages": 3}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Entities in this page.
    pub items: Vec<T>,
    /// Total number of results across all pages.
    pub total: Option<i64>,
    /// Current page number (1-indexed).
    pub page: Option<i64>,
    /// Number of pages available.
    pub pages: Option<i64>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: None,
            page: None,
            pages: None,
        }
    }
}

impl<T: Entity> Page<T> {
    /// Parse a list envelope, taking the entities from `key`.
    ///
    /// A bare list (no envelope) is accepted as a single page without totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the entities cannot be parsed or the body is not
    /// an object or list.
    pub fn from_payload(payload: Payload, key: &str) -> Result<Self, MappingError> {
        match payload {
            Payload::Single(mut envelope) => {
                let items = match envelope.remove(key) {
                    Some(Value::Array(items)) => to_object_list(items)?,
                    Some(Value::Null) | None => Vec::new(),
                    Some(other) => {
                        return Err(MappingError::UnexpectedShape {
                            expected: "list",
                            found: Payload::from_value(other).shape(),
                        });
                    }
                };
                Ok(Self {
                    items,
                    total: envelope.get("total").and_then(Value::as_i64),
                    page: envelope.get("page").and_then(Value::as_i64),
                    pages: envelope.get("pages").and_then(Value::as_i64),
                })
            }
            other => Ok(Self {
                items: to_object_list(other)?,
                ..Self::default()
            }),
        }
    }

    /// Whether another page follows this one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        matches!((self.page, self.pages), (Some(page), Some(pages)) if page < pages)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_shapes() {
        assert_eq!(Payload::decode(b""), Payload::Empty);
        assert_eq!(Payload::decode(b"  \n"), Payload::Empty);
        assert_eq!(Payload::decode(b"null"), Payload::Empty);
        assert!(matches!(Payload::decode(br#"{"a":1}"#), Payload::Single(_)));
        assert!(matches!(Payload::decode(b"[1,2]"), Payload::Collection(_)));
        assert_eq!(Payload::decode(b"true"), Payload::Scalar(json!(true)));
        assert_eq!(
            Payload::decode(b"<html>oops</html>"),
            Payload::Text("<html>oops</html>".to_string())
        );
    }

    #[test]
    fn test_into_value_round_trip() {
        let value = json!({"orders": [], "total": 0});
        assert_eq!(Payload::from_value(value.clone()).into_value(), value);
    }
}
