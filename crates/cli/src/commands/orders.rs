//! Order listing.
//!
//! # Usage
//!
//! ```bash
//! ss-cli orders --status awaiting_shipment --page 2 --page-size 50
//! ```

use shipstation_client::ShipStationClient;
use shipstation_core::{OrderStatus, Params};

use super::{CommandError, print_entities};

/// Filters for one page of orders.
#[derive(Debug, Default)]
pub struct OrderFilter {
    pub status: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl OrderFilter {
    /// Build the list parameters, rejecting unknown statuses up front.
    ///
    /// # Errors
    ///
    /// Returns an error if the status is not a ShipStation order status.
    pub fn to_params(&self) -> Result<Params, CommandError> {
        let mut params = Params::new();
        if let Some(status) = &self.status {
            params.insert("order_status", OrderStatus::parse(status)?.as_str());
        }
        if let Some(page) = self.page {
            params.insert("page", page);
        }
        if let Some(page_size) = self.page_size {
            params.insert("page_size", page_size);
        }
        Ok(params)
    }
}

/// Print one page of orders.
pub async fn list(client: &ShipStationClient, filter: &OrderFilter) -> Result<(), CommandError> {
    let page = client.fetch_orders(&filter.to_params()?).await?;
    tracing::info!(
        total = ?page.total,
        page = ?page.page,
        pages = ?page.pages,
        "Fetched orders"
    );
    print_entities(&page.items)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_params() {
        let filter = OrderFilter {
            status: Some("shipped".to_owned()),
            page: Some(2),
            page_size: None,
        };
        let params = filter.to_params().unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(
            params.get("order_status").and_then(|p| p.as_text()),
            Some("shipped")
        );
    }

    #[test]
    fn test_filter_rejects_unknown_status() {
        let filter = OrderFilter {
            status: Some("lost".to_owned()),
            ..OrderFilter::default()
        };
        assert!(matches!(filter.to_params(), Err(CommandError::Mapping(_))));
    }
}
