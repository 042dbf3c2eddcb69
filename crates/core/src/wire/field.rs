//! Per-type wire conversion for entity fields.
//!
//! Outbound values follow the coercion rules of the ShipStation wire format:
//! booleans become `"true"`/`"false"`, integers and decimals become their
//! string form, nested entities become objects. Inbound values are taken as-is
//! when their JSON kind matches the field type and rejected otherwise; nothing
//! is coerced back, so a boolean that went out as `"true"` does not come back
//! as a boolean.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::MappingError;

/// A value that can be stored in an entity field.
pub trait WireField: Sized {
    /// Convert to the wire representation.
    ///
    /// # Errors
    ///
    /// Returns an error if a nested entity is not ready to be serialized.
    fn to_wire(&self) -> Result<Value, MappingError>;

    /// Take a raw wire value, or `None` if its JSON kind does not fit.
    fn from_wire(value: Value) -> Option<Self>;

    /// Whether the value counts as present for required-attribute checks.
    fn is_truthy(&self) -> bool;
}

impl WireField for String {
    fn to_wire(&self) -> Result<Value, MappingError> {
        Ok(Value::String(self.clone()))
    }

    fn from_wire(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl WireField for bool {
    fn to_wire(&self) -> Result<Value, MappingError> {
        let literal = if *self { "true" } else { "false" };
        Ok(Value::String(literal.to_owned()))
    }

    fn from_wire(value: Value) -> Option<Self> {
        value.as_bool()
    }

    fn is_truthy(&self) -> bool {
        *self
    }
}

impl WireField for i64 {
    fn to_wire(&self) -> Result<Value, MappingError> {
        Ok(Value::String(self.to_string()))
    }

    fn from_wire(value: Value) -> Option<Self> {
        value.as_i64()
    }

    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl WireField for Decimal {
    fn to_wire(&self) -> Result<Value, MappingError> {
        Ok(Value::String(self.to_string()))
    }

    fn from_wire(value: Value) -> Option<Self> {
        let Value::Number(number) = value else {
            return None;
        };
        let text = number.to_string();
        Self::from_str(&text)
            .or_else(|_| Self::from_scientific(&text))
            .ok()
    }

    fn is_truthy(&self) -> bool {
        !self.is_zero()
    }
}

/// Free-form JSON passes through untouched in both directions.
impl WireField for Value {
    fn to_wire(&self) -> Result<Value, MappingError> {
        Ok(self.clone())
    }

    fn from_wire(value: Value) -> Option<Self> {
        Some(value)
    }

    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
            Self::String(s) => !s.is_empty(),
            Self::Array(a) => !a.is_empty(),
            Self::Object(o) => !o.is_empty(),
        }
    }
}

impl<T: WireField> WireField for Option<T> {
    fn to_wire(&self) -> Result<Value, MappingError> {
        self.as_ref().map_or(Ok(Value::Null), WireField::to_wire)
    }

    fn from_wire(value: Value) -> Option<Self> {
        if value.is_null() {
            return Some(None);
        }
        T::from_wire(value).map(Some)
    }

    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(WireField::is_truthy)
    }
}

impl<T: WireField> WireField for Vec<T> {
    fn to_wire(&self) -> Result<Value, MappingError> {
        self.iter()
            .map(WireField::to_wire)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    fn from_wire(value: Value) -> Option<Self> {
        match value {
            Value::Array(items) => items.into_iter().map(T::from_wire).collect(),
            Value::Null => Some(Vec::new()),
            _ => None,
        }
    }

    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}
