//! Async ShipStation client.
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_client::{ClientConfig, ShipStationClient};
//! use shipstation_core::Params;
//!
//! let client = ShipStationClient::new(ClientConfig::from_env()?)?;
//!
//! let page = client
//!     .fetch_orders(&Params::new().with("order_status", "awaiting_shipment"))
//!     .await?;
//! for order in &page.items {
//!     println!("{:?}", order.order_number);
//! }
//! ```

use std::sync::Arc;

use shipstation_core::{
    Carrier, CarrierPackage, CarrierService, Customer, Fulfillment, Marketplace, Order, Page,
    Params, Rate, Store, User, Warehouse, Webhook,
};
use tracing::instrument;

use crate::batch::OrderBatch;
use crate::config::ClientConfig;
use crate::error::ShipStationError;
use crate::operations as ops;
use crate::transport::{AsyncTransport, HttpTransport, RawResponse, Request};

/// Async client for the ShipStation API.
///
/// Every method validates its input before a request is built, so a
/// [`ShipStationError::Mapping`] means nothing was sent. Cheap to clone; clones
/// share the transport.
pub struct ShipStationClient<T = HttpTransport> {
    inner: Arc<T>,
}

impl<T> Clone for ShipStationClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ShipStationClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShipStationClient")
            .field("transport", &self.inner)
            .finish()
    }
}

impl ShipStationClient<HttpTransport> {
    /// Create a client over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, ShipStationError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Create a client from `SHIPSTATION_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is incomplete or invalid.
    pub fn from_env() -> Result<Self, ShipStationError> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: AsyncTransport> ShipStationClient<T> {
    /// Create a client over any transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            inner: Arc::new(transport),
        }
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.inner
    }

    async fn send(&self, request: Request) -> Result<RawResponse, ShipStationError> {
        Ok(self.inner.send(request).await?)
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// List orders matching the given filters.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown filter, a transport failure, or an
    /// unparseable body.
    #[instrument(skip(self, params))]
    pub async fn fetch_orders(&self, params: &Params) -> Result<Page<Order>, ShipStationError> {
        let response = self.send(ops::build_fetch_orders(params)?).await?;
        ops::parse_page(response, "orders")
    }

    /// Get a single order.
    ///
    /// # Errors
    ///
    /// Returns an error for a transport failure or an unparseable body.
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: i64) -> Result<Order, ShipStationError> {
        ops::parse_entity(self.send(ops::build_get_order(order_id)).await?)
    }

    /// Create or update an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order cannot be serialized, or for a transport
    /// failure or an unparseable body.
    #[instrument(skip(self, order), fields(order_key = ?order.order_key))]
    pub async fn create_order(&self, order: &Order) -> Result<Order, ShipStationError> {
        let response = self.send(ops::build_create_order(order)?).await?;
        ops::parse_entity(response)
    }

    /// Submit every order in the batch, one request each, in order.
    ///
    /// Each result stands alone: a failed order does not stop the rest, and
    /// responses are returned unchecked.
    #[instrument(skip(self, batch), fields(orders = batch.len()))]
    pub async fn submit_orders(
        &self,
        batch: &OrderBatch,
    ) -> Vec<Result<RawResponse, ShipStationError>> {
        let mut results = Vec::with_capacity(batch.len());
        for order in batch.orders() {
            let result = match ops::build_create_order(order) {
                Ok(request) => self.send(request).await,
                Err(e) => Err(e.into()),
            };
            if let Err(e) = &result {
                tracing::warn!(order_key = ?order.order_key, error = %e, "Order submission failed");
            }
            results.push(result);
        }
        results
    }

    // =========================================================================
    // Carriers
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error for a transport failure or an unparseable body.
    #[instrument(skip(self))]
    pub async fn list_carriers(&self) -> Result<Vec<Carrier>, ShipStationError> {
        ops::parse_list(self.send(ops::build_list_carriers()).await?)
    }

    /// # Errors
    ///
    /// Returns an error for a transport failure or an unparseable body.
    #[instrument(skip(self))]
    pub async fn get_carrier(&self, carrier_code: &str) -> Result<Carrier, ShipStationError> {
        ops::parse_entity(self.send(ops::build_get_carrier(carrier_code)).await?)
    }

    /// # Errors
    ///
    /// Returns an error for a transport failure or an unparseable body.
    #[instrument(skip(self))]
    pub async fn list_packages(
        &self,
        carrier_code: &str,
    ) -> Result<Vec<CarrierPackage>, ShipStationError> {
        ops::parse_list(self.send(ops::build_list_packages(carrier_code)).await?)
    }

    /// # Errors
    ///
    /// Returns an error for a transport failure or an unparseable body.
    #[instrument(skip(self))]
    pub async fn list_services(
        &self,
        carrier_code: &str,
    ) -> Result<Vec<CarrierService>, ShipStationError> {
        ops::parse_list(self.send(ops::build_list_services(carrier_code)).await?)
    }

    // =========================================================================
    // Customers & Fulfillments
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error for a transport failure or an unparseable body.
    #[instrument(skip(self))]
    pub async fn get_customer(&self, customer_id: i64) -> Result<Customer, ShipStationError> {
        ops::parse_entity(self.send(ops::build_get_customer(customer_id)).await?)
    }

    /// # Errors
    ///
    /// Returns an error for an unknown filter, a transport failure, or an
    /// unparseable body.
    #[instrument(skip(self, params))]
    pub async fn list_customers(
        &self,
        params: &Params,
    ) -> Result<Page<Customer>, ShipStationError> {
        let response = self.send(ops::build_list_customers(params)?).await?;
        ops::parse_page(response, "customers")
    }

    /// # Errors
    ///
    /// Returns an error for an unknown filter, a transport failure, or an
    /// unparseable body.
    #[instrument(skip(self, params))]
    pub async fn list_fulfillments(
        &self,
        params: &Params,
    ) -> Result<Page<Fulfillment>, ShipStationError> {
        let response = self.send(ops::build_list_fulfillments(params)?).await?;
        ops::parse_page(response, "fulfillments")
    }

    // =========================================================================
    // Shipments
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error for an unknown filter, a transport failure, or an
    /// unparseable body.
    #[instrument(skip(self, params))]
    pub async fn list_shipments(&self, params: &Params) -> Result<Page<Order>, ShipStationError> {
        let response = self.send(ops::build_list_shipments(params)?).await?;
        ops::parse_page(response, "shipments")
    }

    /// Create a shipping label. The result carries the label fields
    /// (`shipment_id`, `tracking_number`, `label_data`, costs).
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, or for a transport
    /// failure or an unparseable body.
    #[instrument(skip(self, options))]
    pub async fn create_shipment_label(&self, options: &Params) -> Result<Order, ShipStationError> {
        let response = self.send(ops::build_create_shipment_label(options)?).await?;
        ops::parse_entity(response)
    }

    /// Quote rates for a package.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, or for a transport
    /// failure or an unparseable body.
    #[instrument(skip(self, options))]
    pub async fn get_rates(&self, options: &Params) -> Result<Vec<Rate>, ShipStationError> {
        let response = self.send(ops::build_get_rates(options)?).await?;
        ops::parse_list(response)
    }

    /// Void a label. The response is returned unchecked.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed.
    #[instrument(skip(self))]
    pub async fn void_label(&self, shipment_id: i64) -> Result<RawResponse, ShipStationError> {
        self.send(ops::build_void_label(shipment_id)?).await
    }

    // =========================================================================
    // Stores & Users
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error for a transport failure or an unparseable body.
    #[instrument(skip(self))]
    pub async fn list_marketplaces(&self) -> Result<Vec<Marketplace>, ShipStationError> {
        ops::parse_list(self.send(ops::build_list_marketplaces()).await?)
    }

    /// # Errors
    ///
    /// Returns an error for a transport failure or an unparseable body.
    #[instrument(skip(self))]
    pub async fn list_stores(
        &self,
        show_inactive: bool,
        marketplace_id: Option<i64>,
    ) -> Result<Vec<Store>, ShipStationError> {
        let request = ops::build_list_stores(show_inactive, marketplace_id);
        ops::parse_list(self.send(request).await?)
    }

    /// # Errors
    ///
    /// Returns an error for a transport failure or an unparseable body.
    #[instrument(skip(self))]
    pub async fn get_store(&self, store_id: i64) -> Result<Store, ShipStationError> {
        ops::parse_entity(self.send(ops::build_get_store(store_id)).await?)
    }

    /// Update a store. The store must carry its id, name, marketplace, and
    /// status mappings.
    ///
    /// # Errors
    ///
    /// Returns an error if a required attribute is unset, or for a transport
    /// failure or an unparseable body.
    #[instrument(skip(self, store), fields(store_id = ?store.store_id))]
    pub async fn update_store(&self, store: &Store) -> Result<Store, ShipStationError> {
        let response = self.send(ops::build_update_store(store)?).await?;
        ops::parse_entity(response)
    }

    /// The response is returned unchecked.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed.
    #[instrument(skip(self))]
    pub async fn deactivate_store(&self, store_id: i64) -> Result<RawResponse, ShipStationError> {
        self.send(ops::build_deactivate_store(store_id)?).await
    }

    /// Reactivate a store, returning it as the service reports it.
    ///
    /// # Errors
    ///
    /// Returns an error for a transport failure or an unparseable body.
    #[instrument(skip(self))]
    pub async fn reactivate_store(&self, store_id: i64) -> Result<Store, ShipStationError> {
        let response = self.send(ops::build_reactivate_store(store_id)?).await?;
        ops::parse_entity(response)
    }

    /// # Errors
    ///
    /// Returns an error for a transport failure or an unparseable body.
    #[instrument(skip(self))]
    pub async fn list_users(&self, show_inactive: bool) -> Result<Vec<User>, ShipStationError> {
        ops::parse_list(self.send(ops::build_list_users(show_inactive)).await?)
    }

    // =========================================================================
    // Warehouses
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error for a transport failure or an unparseable body.
    #[instrument(skip(self))]
    pub async fn get_warehouse(&self, warehouse_id: i64) -> Result<Warehouse, ShipStationError> {
        ops::parse_entity(self.send(ops::build_get_warehouse(warehouse_id)).await?)
    }

    /// # Errors
    ///
    /// Returns an error for a transport failure or an unparseable body.
    #[instrument(skip(self))]
    pub async fn list_warehouses(&self) -> Result<Vec<Warehouse>, ShipStationError> {
        ops::parse_list(self.send(ops::build_list_warehouses()).await?)
    }

    /// # Errors
    ///
    /// Returns an error if the options are invalid, or for a transport
    /// failure or an unparseable body.
    #[instrument(skip(self, options))]
    pub async fn create_warehouse(&self, options: &Params) -> Result<Warehouse, ShipStationError> {
        let response = self.send(ops::build_create_warehouse(options)?).await?;
        ops::parse_entity(response)
    }

    /// # Errors
    ///
    /// Returns an error if a required attribute is unset, or for a transport
    /// failure or an unparseable body.
    #[instrument(skip(self, warehouse), fields(warehouse_id = ?warehouse.warehouse_id))]
    pub async fn update_warehouse(
        &self,
        warehouse: &Warehouse,
    ) -> Result<Warehouse, ShipStationError> {
        let response = self.send(ops::build_update_warehouse(warehouse)?).await?;
        ops::parse_entity(response)
    }

    /// The response is returned unchecked.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed.
    #[instrument(skip(self))]
    pub async fn delete_warehouse(
        &self,
        warehouse_id: i64,
    ) -> Result<RawResponse, ShipStationError> {
        self.send(ops::build_delete_warehouse(warehouse_id)).await
    }

    // =========================================================================
    // Webhooks
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error for a transport failure or an unparseable body.
    #[instrument(skip(self))]
    pub async fn list_webhooks(&self) -> Result<Vec<Webhook>, ShipStationError> {
        let response = self.send(ops::build_list_webhooks()).await?;
        Ok(ops::parse_page(response, "webhooks")?.items)
    }

    /// Subscribe to a webhook event. Option keys are sent verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the request could not
    /// be completed.
    #[instrument(skip(self, options))]
    pub async fn subscribe_to_webhook(
        &self,
        options: &Params,
    ) -> Result<RawResponse, ShipStationError> {
        self.send(ops::build_subscribe_to_webhook(options)?).await
    }

    /// The response is returned unchecked.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed.
    #[instrument(skip(self))]
    pub async fn unsubscribe_from_webhook(
        &self,
        webhook_id: i64,
    ) -> Result<RawResponse, ShipStationError> {
        self.send(ops::build_unsubscribe_from_webhook(webhook_id)).await
    }
}
