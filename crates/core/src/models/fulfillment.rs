use rust_decimal::Decimal;

use super::Address;
use crate::wire::Entity;

crate::wire_entity! {
    /// An order shipped outside ShipStation and marked fulfilled.
    pub struct Fulfillment {
        pub fulfillment_id: Option<i64>,
        pub order_id: Option<i64>,
        pub order_number: Option<String>,
        pub user_id: Option<String>,
        pub customer_email: Option<String>,
        pub tracking_number: Option<String>,
        pub create_date: Option<String>,
        pub ship_date: Option<String>,
        pub void_date: Option<String>,
        pub delivery_date: Option<String>,
        pub carrier_code: Option<String>,
        pub fulfillment_provider_code: Option<String>,
        pub fulfillment_service_code: Option<String>,
        pub fulfillment_fee: Option<Decimal>,
        pub void_requested: Option<bool>,
        pub voided: Option<bool>,
        pub marketplace_notified: Option<bool>,
        pub notify_error_message: Option<String>,
        pub ship_to: Option<Address>,
    }
}

impl Entity for Fulfillment {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::wire::{Page, Payload};

    #[test]
    fn test_fulfillment_page() {
        let payload = Payload::from(json!({
            "fulfillments": [{
                "fulfillmentId": 33_974_374,
                "orderId": 191_759_016,
                "orderNumber": "101",
                "trackingNumber": "783408231234",
                "fulfillmentFee": 0,
                "voided": false,
                "shipTo": {"name": "Yoda", "city": "Dagobah"}
            }],
            "total": 1,
            "page": 1,
            "pages": 1
        }));
        let page: Page<Fulfillment> = Page::from_payload(payload, "fulfillments").unwrap();
        assert_eq!(page.total, Some(1));
        assert!(!page.has_next_page());
        let fulfillment = &page.items[0];
        assert_eq!(fulfillment.tracking_number.as_deref(), Some("783408231234"));
        assert_eq!(
            fulfillment.ship_to.as_ref().and_then(|a| a.city.as_deref()),
            Some("Dagobah")
        );
    }
}
