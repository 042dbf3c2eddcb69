//! Caller-supplied option and filter bags.
//!
//! List filters and request options are open-ended, so they travel as a
//! [`Params`] map of tagged [`Param`] values rather than as fixed structs. The
//! tag lets operations check at run time that, for example, `ship_to` holds an
//! [`Address`] and not a bare mapping.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::MappingError;
use crate::models::{
    Address, AdvancedOptions, Dimensions, InsuranceOptions, InternationalOptions, StatusMapping,
    Weight,
};
use crate::wire::{Entity, WireField, WireObject};

/// One parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Text(String),
    Bool(bool),
    Integer(i64),
    Decimal(Decimal),
    List(Vec<Param>),
    /// A bare mapping, passed through untouched.
    Object(WireObject),
    Weight(Weight),
    Dimensions(Dimensions),
    Address(Address),
    InternationalOptions(InternationalOptions),
    AdvancedOptions(AdvancedOptions),
    InsuranceOptions(InsuranceOptions),
    StatusMappings(Vec<StatusMapping>),
}

/// The kind of a [`Param`], used in type checks and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Text,
    Bool,
    Integer,
    Decimal,
    List,
    Object,
    Weight,
    Dimensions,
    Address,
    InternationalOptions,
    AdvancedOptions,
    InsuranceOptions,
    StatusMappings,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "Text",
            Self::Bool => "Bool",
            Self::Integer => "Integer",
            Self::Decimal => "Decimal",
            Self::List => "List",
            Self::Object => "Object",
            Self::Weight => "Weight",
            Self::Dimensions => "Dimensions",
            Self::Address => "Address",
            Self::InternationalOptions => "InternationalOptions",
            Self::AdvancedOptions => "AdvancedOptions",
            Self::InsuranceOptions => "InsuranceOptions",
            Self::StatusMappings => "StatusMappings",
        };
        f.write_str(name)
    }
}

impl Param {
    /// The kind tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        match self {
            Self::Text(_) => ParamKind::Text,
            Self::Bool(_) => ParamKind::Bool,
            Self::Integer(_) => ParamKind::Integer,
            Self::Decimal(_) => ParamKind::Decimal,
            Self::List(_) => ParamKind::List,
            Self::Object(_) => ParamKind::Object,
            Self::Weight(_) => ParamKind::Weight,
            Self::Dimensions(_) => ParamKind::Dimensions,
            Self::Address(_) => ParamKind::Address,
            Self::InternationalOptions(_) => ParamKind::InternationalOptions,
            Self::AdvancedOptions(_) => ParamKind::AdvancedOptions,
            Self::InsuranceOptions(_) => ParamKind::InsuranceOptions,
            Self::StatusMappings(_) => ParamKind::StatusMappings,
        }
    }

    /// Wire representation, with the same coercion rules as entity fields.
    ///
    /// # Errors
    ///
    /// Returns an error if a nested entity cannot be serialized.
    pub fn to_wire(&self) -> Result<Value, MappingError> {
        match self {
            Self::Text(text) => text.to_wire(),
            Self::Bool(flag) => flag.to_wire(),
            Self::Integer(number) => number.to_wire(),
            Self::Decimal(amount) => amount.to_wire(),
            Self::List(items) => items
                .iter()
                .map(Self::to_wire)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            Self::Object(object) => Ok(Value::Object(object.clone())),
            Self::Weight(weight) => weight.to_wire_object().map(Value::Object),
            Self::Dimensions(dimensions) => dimensions.to_wire_object().map(Value::Object),
            Self::Address(address) => address.to_wire_object().map(Value::Object),
            Self::InternationalOptions(options) => options.to_wire_object().map(Value::Object),
            Self::AdvancedOptions(options) => options.to_wire_object().map(Value::Object),
            Self::InsuranceOptions(options) => options.to_wire_object().map(Value::Object),
            Self::StatusMappings(mappings) => mappings.to_wire(),
        }
    }

    /// Whether the value counts as supplied (non-empty, non-zero, true).
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Bool(flag) => *flag,
            Self::Integer(number) => *number != 0,
            Self::Decimal(amount) => !amount.is_zero(),
            Self::List(items) => !items.is_empty(),
            Self::Object(object) => !object.is_empty(),
            Self::StatusMappings(mappings) => !mappings.is_empty(),
            Self::Weight(_)
            | Self::Dimensions(_)
            | Self::Address(_)
            | Self::InternationalOptions(_)
            | Self::AdvancedOptions(_)
            | Self::InsuranceOptions(_) => true,
        }
    }

    /// The text content, if this is a [`Param::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

macro_rules! param_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Param {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

param_from! {
    String => Text,
    bool => Bool,
    i64 => Integer,
    Decimal => Decimal,
    Vec<Param> => List,
    WireObject => Object,
    Weight => Weight,
    Dimensions => Dimensions,
    Address => Address,
    InternationalOptions => InternationalOptions,
    AdvancedOptions => AdvancedOptions,
    InsuranceOptions => InsuranceOptions,
    Vec<StatusMapping> => StatusMappings,
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i32> for Param {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

/// An ordered bag of snake_case keys to parameter values.
///
/// ```
/// use shipstation_core::params::Params;
///
/// let params = Params::new()
///     .with("order_status", "shipped")
///     .with("page", 2);
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.get("order_status").and_then(|p| p.as_text()), Some("shipped"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, Param>);

impl Params {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Param>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a parameter, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Param>) -> Option<Param> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Param> {
        self.0.get(key)
    }

    /// Whether the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Whether the key is present with a truthy value.
    #[must_use]
    pub fn is_supplied(&self, key: &str) -> bool {
        self.get(key).is_some_and(Param::is_truthy)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Param)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Param>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_param_kinds() {
        assert_eq!(Param::from("x").kind(), ParamKind::Text);
        assert_eq!(Param::from(3).kind(), ParamKind::Integer);
        assert_eq!(Param::from(Address::default()).kind(), ParamKind::Address);
        assert_eq!(ParamKind::InternationalOptions.to_string(), "InternationalOptions");
    }

    #[test]
    fn test_param_wire_coercion() {
        assert_eq!(Param::from(true).to_wire().unwrap(), json!("true"));
        assert_eq!(Param::from(12).to_wire().unwrap(), json!("12"));
        assert_eq!(
            Param::List(vec![Param::from(1), Param::from("a")]).to_wire().unwrap(),
            json!(["1", "a"])
        );

        let mut bare = WireObject::new();
        bare.insert("flag".to_string(), json!(true));
        assert_eq!(Param::from(bare).to_wire().unwrap(), json!({"flag": true}));
    }

    #[test]
    fn test_truthiness() {
        assert!(!Param::from("").is_truthy());
        assert!(!Param::from(0).is_truthy());
        assert!(!Param::from(false).is_truthy());
        assert!(Param::from(Dimensions::default()).is_truthy());
        assert!(!Param::from(Vec::<StatusMapping>::new()).is_truthy());
    }

    #[test]
    fn test_params_collect_and_order() {
        let params: Params = [("page_size", 50), ("page", 1)].into_iter().collect();
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["page", "page_size"]);
        assert!(params.is_supplied("page"));
        assert!(!params.is_supplied("missing"));
    }
}
