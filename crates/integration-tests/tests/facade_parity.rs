//! The async and blocking facades must send identical requests for the same
//! input, and reject the same invalid input.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use shipstation_client::{BlockingShipStationClient, OrderBatch, Request, ShipStationClient};
use shipstation_core::{
    Address, AdvancedOptions, Dimensions, InternationalOptions, Item, MappingError, Order,
    Params, Weight, WeightUnit,
};
use shipstation_integration_tests::RecordingTransport;

fn clients() -> (
    ShipStationClient<RecordingTransport>,
    BlockingShipStationClient<RecordingTransport>,
) {
    (
        ShipStationClient::with_transport(RecordingTransport::new()),
        BlockingShipStationClient::with_transport(RecordingTransport::new()),
    )
}

fn sample_order() -> Order {
    let mut order = Order::new(Some("parity-1"), Some("P-1"));
    order.set_order_date("2024-05-06T07:08:09.000000");
    order.set_status(Some("awaiting_shipment")).unwrap();
    order.set_shipping_address(Address {
        name: Some("Ada".to_owned()),
        country: Some("GB".to_owned()),
        residential: Some(true),
        ..Address::default()
    });
    let mut item = Item::new("SKU-9", "Gadget", 3);
    item.set_weight(Weight::with_unit(Decimal::new(125, 2), WeightUnit::Ounces));
    order.add_item(item);
    order
}

fn label_options() -> Params {
    Params::new()
        .with("carrier_code", "fedex")
        .with("service_code", "fedex_ground")
        .with("ship_date", "2024-05-07")
        .with("weight", Weight::with_unit(Decimal::new(2, 0), WeightUnit::Pounds))
        .with("dimensions", Dimensions::default())
        .with("ship_to", Address::default())
        .with("international_options", InternationalOptions::new())
        .with("advanced_options", AdvancedOptions::default())
        .with("test_label", true)
}

fn single_request(requests: &[Request]) -> &Request {
    assert_eq!(requests.len(), 1, "expected exactly one request");
    &requests[0]
}

#[tokio::test]
async fn test_create_order_bytes_match() {
    let (async_client, blocking_client) = clients();
    let order = sample_order();

    async_client.create_order(&order).await.ok();
    blocking_client.create_order(&order).ok();

    let sent_async = async_client.transport().requests();
    let sent_blocking = blocking_client.transport().requests();
    assert_eq!(single_request(&sent_async), single_request(&sent_blocking));
    assert_eq!(sent_async[0].body, sent_blocking[0].body);
}

#[tokio::test]
async fn test_label_and_rate_bytes_match() {
    let (async_client, blocking_client) = clients();
    let options = label_options();

    async_client.create_shipment_label(&options).await.ok();
    blocking_client.create_shipment_label(&options).ok();

    assert_eq!(
        async_client.transport().requests(),
        blocking_client.transport().requests()
    );
}

#[tokio::test]
async fn test_query_requests_match() {
    let (async_client, blocking_client) = clients();
    let params = Params::new()
        .with("recipient_name", "Ada Lovelace")
        .with("include_shipment_items", true)
        .with("page", 3);

    async_client.list_shipments(&params).await.unwrap();
    blocking_client.list_shipments(&params).unwrap();
    async_client.list_stores(true, Some(11)).await.unwrap();
    blocking_client.list_stores(true, Some(11)).unwrap();
    async_client.list_users(false).await.unwrap();
    blocking_client.list_users(false).unwrap();

    assert_eq!(
        async_client.transport().requests(),
        blocking_client.transport().requests()
    );
}

#[tokio::test]
async fn test_webhook_subscription_bytes_match() {
    let (async_client, blocking_client) = clients();
    let options = Params::new()
        .with("target_url", "https://example.com/hooks/ship")
        .with("event", "SHIP_NOTIFY")
        .with("friendly_name", "Ship hook");

    async_client.subscribe_to_webhook(&options).await.unwrap();
    blocking_client.subscribe_to_webhook(&options).unwrap();

    assert_eq!(
        async_client.transport().requests(),
        blocking_client.transport().requests()
    );
}

#[tokio::test]
async fn test_both_facades_reject_the_same_input() {
    let (async_client, blocking_client) = clients();
    let options = Params::new()
        .with("carrier_code", "fedex")
        .with("weight", "2 lb")
        .with("dimensions", Dimensions::default());

    let async_err = async_client.get_rates(&options).await.unwrap_err();
    let blocking_err = blocking_client.get_rates(&options).unwrap_err();
    assert_eq!(async_err.to_string(), blocking_err.to_string());
    assert!(matches!(
        async_err,
        shipstation_client::ShipStationError::Mapping(MappingError::TypeMismatch { .. })
    ));

    assert!(async_client.transport().requests().is_empty());
    assert!(blocking_client.transport().requests().is_empty());
}

#[tokio::test]
async fn test_batch_requests_match() {
    let (async_client, blocking_client) = clients();
    let batch: OrderBatch = (1..=3)
        .map(|n| {
            let mut order = sample_order();
            order.order_key = Some(format!("batch-{n}"));
            order
        })
        .collect();

    async_client.submit_orders(&batch).await;
    blocking_client.submit_orders(&batch);

    assert_eq!(
        async_client.transport().requests(),
        blocking_client.transport().requests()
    );
    assert_eq!(async_client.transport().requests().len(), 3);
}

#[tokio::test]
async fn test_reactivate_store_parses_on_both_facades() {
    let reply = serde_json::json!({"storeId": 5, "active": true});
    let async_client = ShipStationClient::with_transport(
        RecordingTransport::new().respond_with(reqwest::StatusCode::OK, reply.clone()),
    );
    let blocking_client = BlockingShipStationClient::with_transport(
        RecordingTransport::new().respond_with(reqwest::StatusCode::OK, reply),
    );

    let from_async = async_client.reactivate_store(5).await.unwrap();
    let from_blocking = blocking_client.reactivate_store(5).unwrap();
    assert_eq!(from_async, from_blocking);
    assert_eq!(from_async.store_id, Some(5));
    assert_eq!(
        async_client.transport().requests(),
        blocking_client.transport().requests()
    );
}
