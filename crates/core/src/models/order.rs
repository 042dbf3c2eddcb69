//! Orders and order line items.

use rust_decimal::Decimal;
use serde_json::Value;

use super::{Address, AdvancedOptions, Dimensions, InsuranceOptions, InternationalOptions, Weight};
use crate::error::MappingError;
use crate::types::{OrderStatus, WeightUnit};
use crate::wire::{Entity, Fields, WireObject};

crate::wire_entity! {
    /// A line item on an order or shipment.
    pub struct Item {
        pub order_item_id: Option<i64>,
        pub line_item_key: Option<String>,
        pub sku: Option<String>,
        pub name: Option<String>,
        pub image_url: Option<String>,
        pub weight: Option<Weight>,
        pub quantity: Option<i64>,
        pub unit_price: Option<Decimal>,
        pub tax_amount: Option<Decimal>,
        pub shipping_amount: Option<Decimal>,
        pub warehouse_location: Option<String>,
        /// Name/value option pairs, passed through as-is.
        pub options: Option<Value>,
        pub product_id: Option<i64>,
        pub fulfillment_sku: Option<String>,
        pub adjustment: Option<bool>,
        pub upc: Option<String>,
    }
}

impl Entity for Item {}

impl Item {
    #[must_use]
    pub fn new(sku: impl Into<String>, name: impl Into<String>, quantity: i64) -> Self {
        Self {
            sku: Some(sku.into()),
            name: Some(name.into()),
            quantity: Some(quantity),
            ..Self::default()
        }
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = Some(weight);
    }
}

crate::wire_entity! {
    /// An order, as submitted to ShipStation or returned by order and shipment
    /// queries.
    pub struct Order {
        pub advanced_options: Option<AdvancedOptions>,
        pub amount_paid: Option<Decimal>,
        pub batch_number: Option<String>,
        pub bill_to: Option<Address>,
        pub carrier_code: Option<String>,
        pub confirmation: Option<String>,
        pub create_date: Option<String>,
        pub customer_email: Option<String>,
        pub customer_id: Option<i64>,
        pub customer_notes: Option<String>,
        pub customer_username: Option<String>,
        pub dimensions: Option<Dimensions>,
        pub form_data: Option<Value>,
        pub gift: Option<bool>,
        pub gift_message: Option<String>,
        pub insurance_cost: Option<Decimal>,
        pub insurance_options: Option<InsuranceOptions>,
        pub internal_notes: Option<String>,
        pub international_options: Option<InternationalOptions>,
        pub is_return_label: Option<bool>,
        pub items: Vec<Item>,
        pub label_data: Option<String>,
        pub marketplace_notified: Option<bool>,
        pub notify_error_message: Option<String>,
        pub order_date: Option<String>,
        pub order_id: Option<i64>,
        pub order_key: Option<String>,
        pub order_number: Option<String>,
        pub order_status: Option<OrderStatus>,
        pub order_total: Option<Decimal>,
        pub package_code: Option<String>,
        pub payment_date: Option<String>,
        pub payment_method: Option<String>,
        pub requested_shipping_service: Option<String>,
        pub service_code: Option<String>,
        pub ship_date: Option<String>,
        pub ship_to: Option<Address>,
        pub shipment_cost: Option<Decimal>,
        pub shipment_id: Option<i64>,
        pub shipment_items: Vec<Item>,
        pub shipping_amount: Option<Decimal>,
        pub tax_amount: Option<Decimal>,
        pub tracking_number: Option<String>,
        pub user_id: Option<String>,
        pub void_date: Option<String>,
        pub voided: Option<bool>,
        pub warehouse_id: Option<i64>,
        pub weight: Option<Weight>,
    }
}

impl Entity for Order {
    /// The flat field pass, with `weight` replaced by the computed order
    /// weight. The stored `weight` is never serialized.
    fn to_wire_object(&self) -> Result<WireObject, MappingError> {
        let weight = self.weight_total()?;
        let mut out = WireObject::new();
        self.write_fields_except(&mut out, &["weight"])?;
        out.insert("weight".to_owned(), Value::Object(weight.to_wire_object()?));
        Ok(out)
    }
}

impl Order {
    /// A new outbound order dated now, with zero money amounts.
    #[must_use]
    pub fn new(order_key: Option<&str>, order_number: Option<&str>) -> Self {
        Self {
            order_key: order_key.map(str::to_owned),
            order_number: order_number.map(str::to_owned),
            order_date: Some(
                chrono::Local::now()
                    .naive_local()
                    .format("%Y-%m-%dT%H:%M:%S%.6f")
                    .to_string(),
            ),
            amount_paid: Some(Decimal::ZERO),
            tax_amount: Some(Decimal::ZERO),
            shipping_amount: Some(Decimal::ZERO),
            ..Self::default()
        }
    }

    /// Set or clear (`None` or empty) the order status.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidEnumValue`] for a status outside
    /// [`OrderStatus::VALUES`]; the previous status is kept.
    pub fn set_status(&mut self, status: Option<&str>) -> Result<(), MappingError> {
        self.order_status = match status.filter(|s| !s.is_empty()) {
            Some(value) => Some(OrderStatus::parse(value)?),
            None => None,
        };
        Ok(())
    }

    pub fn set_customer_details(&mut self, username: Option<&str>, email: Option<&str>) {
        self.customer_username = username.map(str::to_owned);
        self.customer_email = email.map(str::to_owned);
    }

    pub fn set_shipping_address(&mut self, address: Address) {
        self.ship_to = Some(address);
    }

    pub fn set_billing_address(&mut self, address: Address) {
        self.bill_to = Some(address);
    }

    pub fn set_dimensions(&mut self, dimensions: Dimensions) {
        self.dimensions = Some(dimensions);
    }

    pub fn set_international_options(&mut self, options: InternationalOptions) {
        self.international_options = Some(options);
    }

    pub fn set_order_date(&mut self, date: impl Into<String>) {
        self.order_date = Some(date.into());
    }

    #[must_use]
    pub fn order_date(&self) -> Option<&str> {
        self.order_date.as_deref()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Total order weight in ounces, rounded to two decimal places.
    ///
    /// Each item contributes its weight times its quantity; items missing
    /// either contribute nothing. The container weight, if set, is added.
    /// Item weights are summed by value without unit conversion.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Overflow`] if the total does not fit in a
    /// decimal.
    pub fn weight_total(&self) -> Result<Weight, MappingError> {
        let overflow = || MappingError::Overflow {
            entity: "Order",
            field: "weight",
        };
        let mut total = self
            .dimensions
            .as_ref()
            .and_then(|d| d.weight.as_ref())
            .and_then(|w| w.value)
            .unwrap_or_default();
        for item in &self.items {
            let (Some(value), Some(quantity)) =
                (item.weight.as_ref().and_then(|w| w.value), item.quantity)
            else {
                continue;
            };
            let line = value
                .checked_mul(Decimal::from(quantity))
                .ok_or_else(overflow)?;
            total = total.checked_add(line).ok_or_else(overflow)?;
        }
        Ok(Weight::with_unit(total.round_dp(2), WeightUnit::Ounces))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::wire::{WireSource, to_object_list};

    fn sample_order() -> Order {
        let mut order = Order::new(Some("key-1001"), Some("1001"));
        let mut item = Item::new("SKU-1", "Mug", 2);
        item.set_weight(Weight::validated(Decimal::from(3), "ounces").unwrap());
        order.add_item(item);
        order
    }

    #[test]
    fn test_new_order_defaults() {
        let order = Order::new(None, Some("1001"));
        assert_eq!(order.order_number.as_deref(), Some("1001"));
        assert_eq!(order.amount_paid, Some(Decimal::ZERO));
        assert!(order.order_date().is_some_and(|d| d.contains('T')));
        assert!(order.items().is_empty());
    }

    #[test]
    fn test_weight_total_sums_items() {
        let order = sample_order();
        let weight = order.weight_total().unwrap();
        assert_eq!(weight.value, Some(Decimal::from(6)));
        assert_eq!(weight.unit(), Some(WeightUnit::Ounces));
    }

    #[test]
    fn test_weight_total_adds_container_and_skips_unweighted_items() {
        let mut order = sample_order();
        order.add_item(Item::new("SKU-2", "Card", 5));
        let mut dimensions = Dimensions::default();
        dimensions.set_weight(Weight::with_unit(Decimal::new(125, 2), WeightUnit::Ounces));
        order.set_dimensions(dimensions);
        assert_eq!(order.weight_total().unwrap().value, Some(Decimal::new(725, 2)));
    }

    #[test]
    fn test_weight_total_rounds_to_two_places() {
        let mut order = Order::new(None, None);
        let mut item = Item::new("SKU-3", "Pin", 3);
        item.set_weight(Weight::with_unit(Decimal::new(3333, 3), WeightUnit::Ounces));
        order.add_item(item);
        assert_eq!(order.weight_total().unwrap().value, Some(Decimal::new(1000, 2)));
    }

    #[test]
    fn test_weight_total_overflow_is_an_error() {
        let order = Order::from_wire_object(WireSource::Json(
            r#"{"items":[{"quantity":1000000000000,"weight":{"value":1e20,"units":"ounces"}}]}"#,
        ))
        .unwrap();

        let err = order.weight_total().unwrap_err();
        assert!(matches!(
            err,
            MappingError::Overflow { entity: "Order", field: "weight" }
        ));
        assert!(matches!(
            order.to_wire_object(),
            Err(MappingError::Overflow { .. })
        ));
    }

    #[test]
    fn test_stored_weight_is_not_serialized() {
        let mut order = sample_order();
        order.weight = Some(Weight::new(Decimal::ONE, "stone"));
        let wire = order.to_wire_object().unwrap();
        assert_eq!(wire["weight"], json!({"value": "6", "units": "ounces"}));
    }

    #[test]
    fn test_set_status_rejects_unknown_and_keeps_previous() {
        let mut order = Order::new(None, None);
        order.set_status(Some("awaiting_shipment")).unwrap();

        let err = order.set_status(Some("teleported")).unwrap_err();
        assert!(matches!(err, MappingError::InvalidEnumValue { .. }));
        assert_eq!(order.order_status, Some(OrderStatus::AwaitingShipment));

        order.set_status(None).unwrap();
        assert_eq!(order.order_status, None);
    }

    #[test]
    fn test_order_wire_object() {
        let mut order = sample_order();
        order.set_shipping_address(Address {
            name: Some("Jane Doe".to_string()),
            ..Address::default()
        });
        let wire = order.to_wire_object().unwrap();

        assert_eq!(wire["orderNumber"], json!("1001"));
        assert_eq!(wire["orderKey"], json!("key-1001"));
        assert_eq!(wire["amountPaid"], json!("0"));
        assert_eq!(wire["weight"], json!({"value": "6", "units": "ounces"}));
        assert_eq!(wire["items"][0]["quantity"], json!("2"));
        assert_eq!(wire["items"][0]["weight"]["units"], json!("ounces"));
        assert_eq!(wire["shipTo"]["name"], json!("Jane Doe"));
        assert_eq!(wire["billTo"], json!(null));
        assert_eq!(wire["shipmentItems"], json!([]));
    }

    #[test]
    fn test_order_from_response() {
        let order = Order::from_wire_object(json!({
            "orderId": 94_113_592,
            "orderNumber": "TEST-ORDER-API-DOCS",
            "orderStatus": "awaiting_shipment",
            "orderTotal": 194.43,
            "billTo": {"name": "Thomas Jefferson", "residential": null},
            "shipTo": {"name": "The President", "postalCode": "20500"},
            "items": [
                {"lineItemKey": "vd08-MSLbtx", "sku": "ABC123", "quantity": 2,
                 "weight": {"value": 24, "units": "ounces", "WeightUnits": 1}}
            ],
            "advancedOptions": {"customField1": "Custom data", "mergedIds": []},
            "tagIds": null
        }))
        .unwrap();

        assert_eq!(order.order_id, Some(94_113_592));
        assert_eq!(order.order_status, Some(OrderStatus::AwaitingShipment));
        assert_eq!(order.order_total, Some(Decimal::new(19443, 2)));
        assert_eq!(order.ship_to.unwrap().postal_code.as_deref(), Some("20500"));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, Some(2));
        assert_eq!(
            order.advanced_options.unwrap().custom_field_1.as_deref(),
            Some("Custom data")
        );
    }

    #[test]
    fn test_unknown_status_from_response_is_skipped() {
        let order = Order::from_wire_object(json!({"orderStatus": "teleported"})).unwrap();
        assert_eq!(order.order_status, None);
    }

    #[test]
    fn test_object_list_single_and_many() {
        let one: Vec<Order> = to_object_list(json!({"orderNumber": "1"})).unwrap();
        assert_eq!(one.len(), 1);

        let many: Vec<Order> =
            to_object_list(json!([{"orderNumber": "1"}, {"orderNumber": "2"}])).unwrap();
        let numbers: Vec<_> = many.iter().filter_map(|o| o.order_number.as_deref()).collect();
        assert_eq!(numbers, vec!["1", "2"]);
    }

    #[test]
    fn test_round_trip_keeps_strings() {
        let order = sample_order();
        let back = Order::from_wire_object(order.to_wire_object().unwrap()).unwrap();
        assert_eq!(back.order_number, order.order_number);
        assert_eq!(back.order_key, order.order_key);
        assert_eq!(back.order_date, order.order_date);
        // Numbers went out as strings and are not coerced back.
        assert_eq!(back.amount_paid, None);
        assert_eq!(back.items[0].sku.as_deref(), Some("SKU-1"));
        assert_eq!(back.items[0].quantity, None);
    }
}
