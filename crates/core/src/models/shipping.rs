//! Package, customs, and shipment option entities.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::MappingError;
use crate::types::{Contents, DimensionUnit, NonDelivery, WeightUnit};
use crate::validate::require_membership;
use crate::wire::{Entity, FieldRead, FieldTable, Fields, WireField, WireObject};

/// A weight with its unit of measure.
///
/// The requested unit is only usable once [`Weight::set_units`] has checked it
/// against [`WeightUnit::VALUES`]; serializing a weight whose unit has not
/// been validated fails.
///
/// ```
/// use rust_decimal::Decimal;
/// use shipstation_core::models::Weight;
/// use shipstation_core::wire::Entity;
///
/// let mut weight = Weight::new(Decimal::from(3), "ounces");
/// assert!(weight.to_wire_object().is_err());
///
/// weight.set_units().unwrap();
/// assert_eq!(weight.to_wire_json().unwrap(), r#"{"units":"ounces","value":"3"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Weight {
    pub value: Option<Decimal>,
    /// Requested unit, not yet validated.
    pub units: Option<String>,
    validated_units: Option<WeightUnit>,
}

static WEIGHT_FIELDS: LazyLock<FieldTable> =
    LazyLock::new(|| FieldTable::new("Weight", &["value", "units"]));

impl Weight {
    /// A weight with an unvalidated unit.
    #[must_use]
    pub fn new(value: Decimal, units: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            units: Some(units.into()),
            validated_units: None,
        }
    }

    /// A weight in a unit that is already known to be valid.
    #[must_use]
    pub fn with_unit(value: Decimal, unit: WeightUnit) -> Self {
        Self {
            value: Some(value),
            units: Some(unit.as_str().to_owned()),
            validated_units: Some(unit),
        }
    }

    /// Build a weight and validate its unit in one step.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidEnumValue`] for an unknown unit.
    pub fn validated(value: Decimal, units: &str) -> Result<Self, MappingError> {
        let mut weight = Self::new(value, units);
        weight.set_units()?;
        Ok(weight)
    }

    /// Validate the requested unit, making the weight serializable.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MissingRequiredField`] if no unit was requested
    /// and [`MappingError::InvalidEnumValue`] if it is not an allowed unit.
    pub fn set_units(&mut self) -> Result<(), MappingError> {
        let requested = self
            .units
            .as_deref()
            .ok_or_else(|| MappingError::missing("Weight", "units"))?;
        require_membership("units", requested, WeightUnit::VALUES)?;
        self.validated_units = Some(WeightUnit::parse(requested)?);
        Ok(())
    }

    /// The validated unit, if [`Weight::set_units`] succeeded for the current
    /// requested unit.
    #[must_use]
    pub fn unit(&self) -> Option<WeightUnit> {
        self.validated_units
            .filter(|unit| self.units.as_deref() == Some(unit.as_str()))
    }
}

impl Fields for Weight {
    fn field_table() -> &'static FieldTable {
        &WEIGHT_FIELDS
    }

    fn write_fields_except(
        &self,
        out: &mut WireObject,
        skip: &[&str],
    ) -> Result<(), MappingError> {
        if !skip.contains(&"value") {
            out.insert("value".to_owned(), self.value.to_wire()?);
        }
        if !skip.contains(&"units") {
            let unit = self
                .unit()
                .ok_or_else(|| MappingError::missing("Weight", "units"))?;
            out.insert("units".to_owned(), unit.to_wire()?);
        }
        Ok(())
    }

    fn read_field(&mut self, field: &str, value: Value) -> FieldRead {
        match field {
            "value" => match Option::<Decimal>::from_wire(value) {
                Some(parsed) => {
                    self.value = parsed;
                    FieldRead::Set
                }
                None => FieldRead::Mismatch,
            },
            "units" => match Option::<String>::from_wire(value) {
                Some(parsed) => {
                    // Units reported by the service are accepted when in set.
                    self.validated_units = parsed.as_deref().and_then(|u| WeightUnit::parse(u).ok());
                    self.units = parsed;
                    FieldRead::Set
                }
                None => FieldRead::Mismatch,
            },
            _ => FieldRead::Unknown,
        }
    }

    fn field_truthy(&self, field: &str) -> Option<bool> {
        match field {
            "value" => Some(self.value.is_truthy()),
            "units" => Some(self.units.is_truthy()),
            _ => None,
        }
    }
}

impl Entity for Weight {}

impl WireField for Weight {
    fn to_wire(&self) -> Result<Value, MappingError> {
        self.to_wire_object().map(Value::Object)
    }

    fn from_wire(value: Value) -> Option<Self> {
        Self::from_wire_object(value).ok()
    }

    fn is_truthy(&self) -> bool {
        true
    }
}

crate::wire_entity! {
    /// Package dimensions, optionally with the package weight.
    pub struct Dimensions {
        pub units: Option<DimensionUnit>,
        pub length: Option<Decimal>,
        pub width: Option<Decimal>,
        pub height: Option<Decimal>,
        pub weight: Option<Weight>,
    }
}

impl Entity for Dimensions {}

impl Dimensions {
    /// Set the unit of measure.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidEnumValue`] if `units` is not one of
    /// [`DimensionUnit::VALUES`]; the previous unit is kept.
    pub fn set_units(&mut self, units: &str) -> Result<(), MappingError> {
        self.units = Some(DimensionUnit::parse(units)?);
        Ok(())
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = Some(weight);
    }
}

crate::wire_entity! {
    /// One line of a customs declaration.
    pub struct CustomsItem {
        pub description: Option<String>,
        pub quantity: Option<i64>,
        pub value: Option<Decimal>,
        pub harmonized_tariff_code: Option<String>,
        /// Two-letter ISO country code.
        pub country_of_origin: Option<String>,
    }
}

impl Entity for CustomsItem {}

impl CustomsItem {
    /// Build a validated customs line with a quantity of one.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MissingRequiredField`] if the description,
    /// tariff code, or country is empty, and
    /// [`MappingError::InvalidEnumValue`] if the country is not exactly two
    /// characters.
    pub fn new(
        description: &str,
        value: Decimal,
        harmonized_tariff_code: &str,
        country_of_origin: &str,
    ) -> Result<Self, MappingError> {
        let item = Self {
            description: Some(description.to_owned()),
            quantity: Some(1),
            value: Some(value),
            harmonized_tariff_code: Some(harmonized_tariff_code.to_owned()),
            country_of_origin: Some(country_of_origin.to_owned()),
        };
        item.validate()?;
        Ok(item)
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Re-run the construction checks, e.g. on an item parsed from a response.
    ///
    /// # Errors
    ///
    /// See [`CustomsItem::new`].
    pub fn validate(&self) -> Result<(), MappingError> {
        self.require_attribute("description")?;
        self.require_attribute("harmonized_tariff_code")?;
        self.require_attribute("country_of_origin")?;
        let country = self.country_of_origin.as_deref().unwrap_or_default();
        if country.chars().count() != 2 {
            return Err(MappingError::InvalidEnumValue {
                field: "country_of_origin",
                value: country.to_owned(),
                allowed: "a two-letter country code".to_owned(),
            });
        }
        Ok(())
    }
}

crate::wire_entity! {
    /// Customs details for an international shipment.
    pub struct InternationalOptions {
        pub contents: Option<Contents>,
        pub non_delivery: Option<NonDelivery>,
        pub customs_items: Vec<CustomsItem>,
    }
}

impl Entity for InternationalOptions {}

impl InternationalOptions {
    /// Options with no contents and undeliverable packages returned to sender.
    #[must_use]
    pub fn new() -> Self {
        Self {
            non_delivery: Some(NonDelivery::default()),
            ..Self::default()
        }
    }

    /// Set or clear (`None` or empty) the contents type.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidEnumValue`] for an unknown value; the
    /// previous value is kept.
    pub fn set_contents(&mut self, contents: Option<&str>) -> Result<(), MappingError> {
        self.contents = match contents.filter(|c| !c.is_empty()) {
            Some(value) => Some(Contents::parse(value)?),
            None => None,
        };
        Ok(())
    }

    /// Set or clear (`None` or empty) the non-delivery handling.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidEnumValue`] for an unknown value; the
    /// previous value is kept.
    pub fn set_non_delivery(&mut self, non_delivery: Option<&str>) -> Result<(), MappingError> {
        self.non_delivery = match non_delivery.filter(|n| !n.is_empty()) {
            Some(value) => Some(NonDelivery::parse(value)?),
            None => None,
        };
        Ok(())
    }

    pub fn add_customs_item(&mut self, item: CustomsItem) {
        self.customs_items.push(item);
    }
}

crate::wire_entity! {
    /// Carrier and account options for a shipment.
    pub struct AdvancedOptions {
        pub warehouse_id: Option<i64>,
        pub non_machinable: Option<bool>,
        pub saturday_delivery: Option<bool>,
        pub contains_alcohol: Option<bool>,
        pub store_id: Option<i64>,
        pub custom_field_1: Option<String>,
        pub custom_field_2: Option<String>,
        pub custom_field_3: Option<String>,
        pub source: Option<String>,
        pub merged_or_split: Option<bool>,
        pub merged_ids: Vec<i64>,
        pub parent_id: Option<i64>,
        pub bill_to_party: Option<String>,
        pub bill_to_account: Option<String>,
        pub bill_to_postal_code: Option<String>,
        pub bill_to_country_code: Option<String>,
        pub bill_to_my_other_account: Option<String>,
    }
}

impl Entity for AdvancedOptions {}

crate::wire_entity! {
    /// Shipping insurance settings.
    pub struct InsuranceOptions {
        /// `shipsurance`, `carrier`, or `provider`.
        pub provider: Option<String>,
        pub insure_shipment: Option<bool>,
        pub insured_value: Option<Decimal>,
    }
}

impl Entity for InsuranceOptions {}
