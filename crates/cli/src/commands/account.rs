//! Account inspection: stores, warehouses, webhooks, marketplaces.

use shipstation_client::ShipStationClient;

use super::{CommandError, print_entities};

pub async fn stores(client: &ShipStationClient, show_inactive: bool) -> Result<(), CommandError> {
    print_entities(&client.list_stores(show_inactive, None).await?)
}

pub async fn warehouses(client: &ShipStationClient) -> Result<(), CommandError> {
    print_entities(&client.list_warehouses().await?)
}

pub async fn webhooks(client: &ShipStationClient) -> Result<(), CommandError> {
    print_entities(&client.list_webhooks().await?)
}

pub async fn marketplaces(client: &ShipStationClient) -> Result<(), CommandError> {
    print_entities(&client.list_marketplaces().await?)
}
