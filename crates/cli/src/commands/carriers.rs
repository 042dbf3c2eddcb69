//! Carrier inspection commands.
//!
//! # Usage
//!
//! ```bash
//! ss-cli carriers
//! ss-cli packages fedex
//! ss-cli services stamps_com
//! ```

use shipstation_client::ShipStationClient;

use super::{CommandError, print_entities};

/// Print every carrier connected to the account.
pub async fn list(client: &ShipStationClient) -> Result<(), CommandError> {
    let carriers = client.list_carriers().await?;
    tracing::debug!(count = carriers.len(), "Fetched carriers");
    print_entities(&carriers)
}

/// Print the package types a carrier offers.
pub async fn packages(client: &ShipStationClient, carrier_code: &str) -> Result<(), CommandError> {
    print_entities(&client.list_packages(carrier_code).await?)
}

/// Print the services a carrier offers.
pub async fn services(client: &ShipStationClient, carrier_code: &str) -> Result<(), CommandError> {
    print_entities(&client.list_services(carrier_code).await?)
}
