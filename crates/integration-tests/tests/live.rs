//! Read-only tests against the real ShipStation API.
//!
//! Ignored by default. Run with credentials in the environment (or `.env`):
//!
//! ```bash
//! cargo test -p shipstation-integration-tests --test live -- --ignored
//! ```

#![allow(clippy::unwrap_used)]

use shipstation_client::{BlockingShipStationClient, ShipStationClient};
use shipstation_core::Params;

fn async_client() -> ShipStationClient {
    dotenvy::dotenv().ok();
    ShipStationClient::from_env().unwrap()
}

#[tokio::test]
#[ignore = "requires SHIPSTATION_API_KEY and SHIPSTATION_API_SECRET"]
async fn test_live_list_carriers() {
    let carriers = async_client().list_carriers().await.unwrap();
    assert!(carriers.iter().all(|carrier| carrier.code.is_some()));
}

#[tokio::test]
#[ignore = "requires SHIPSTATION_API_KEY and SHIPSTATION_API_SECRET"]
async fn test_live_fetch_orders_page() {
    let page = async_client()
        .fetch_orders(&Params::new().with("page_size", 5))
        .await
        .unwrap();
    assert!(page.items.len() <= 5);
}

#[tokio::test]
#[ignore = "requires SHIPSTATION_API_KEY and SHIPSTATION_API_SECRET"]
async fn test_live_list_warehouses() {
    let warehouses = async_client().list_warehouses().await.unwrap();
    assert!(warehouses.iter().all(|w| w.warehouse_id.is_some()));
}

#[test]
#[ignore = "requires SHIPSTATION_API_KEY and SHIPSTATION_API_SECRET"]
fn test_live_blocking_list_marketplaces() {
    dotenvy::dotenv().ok();
    let client = BlockingShipStationClient::from_env().unwrap();
    assert!(!client.list_marketplaces().unwrap().is_empty());
}
