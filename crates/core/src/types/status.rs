//! Status and event enums.

crate::wire_enum! {
    /// Order status as tracked by ShipStation.
    pub enum OrderStatus as "order_status" {
        AwaitingPayment = "awaiting_payment",
        AwaitingShipment = "awaiting_shipment",
        PendingFulfillment = "pending_fulfillment",
        Shipped = "shipped",
        OnHold = "on_hold",
        Cancelled = "cancelled",
    }
}

crate::wire_enum! {
    /// Events a webhook can subscribe to.
    pub enum WebhookEvent as "event" {
        /// A new order was imported.
        OrderNotify = "ORDER_NOTIFY",
        /// A new order item was imported.
        ItemOrderNotify = "ITEM_ORDER_NOTIFY",
        /// An order was shipped.
        ShipNotify = "SHIP_NOTIFY",
        /// An order item was shipped.
        ItemShipNotify = "ITEM_SHIP_NOTIFY",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::MappingError;

    #[test]
    fn test_order_status_serialization() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::AwaitingShipment).unwrap(),
            "\"awaiting_shipment\""
        );
        let parsed: OrderStatus = serde_json::from_str("\"on_hold\"").unwrap();
        assert_eq!(parsed, OrderStatus::OnHold);
    }

    #[test]
    fn test_order_status_from_str() {
        assert_eq!("shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert_eq!(OrderStatus::Cancelled.to_string(), "cancelled");

        let err = "lost".parse::<OrderStatus>().unwrap_err();
        assert!(matches!(
            err,
            MappingError::InvalidEnumValue { field: "order_status", ref value, .. } if value == "lost"
        ));
    }

    #[test]
    fn test_webhook_event_is_case_sensitive() {
        assert_eq!(WebhookEvent::parse("SHIP_NOTIFY").unwrap(), WebhookEvent::ShipNotify);
        assert!(WebhookEvent::parse("ship_notify").is_err());
        assert_eq!(WebhookEvent::VALUES.len(), 4);
    }
}
