//! Account-level resources: stores, warehouses, webhooks, users, marketplaces.

use serde_json::Value;

use super::Address;
use crate::types::OrderStatus;
use crate::wire::Entity;

crate::wire_entity! {
    /// Maps a ShipStation order status to a store's own status key.
    pub struct StatusMapping {
        pub order_status: Option<OrderStatus>,
        pub status_key: Option<String>,
    }
}

impl Entity for StatusMapping {}

impl StatusMapping {
    #[must_use]
    pub fn new(order_status: OrderStatus, status_key: impl Into<String>) -> Self {
        Self {
            order_status: Some(order_status),
            status_key: Some(status_key.into()),
        }
    }
}

crate::wire_entity! {
    /// A selling channel connected to the account.
    pub struct Store {
        pub store_id: Option<i64>,
        pub store_name: Option<String>,
        pub marketplace_id: Option<i64>,
        pub marketplace_name: Option<String>,
        pub account_name: Option<String>,
        pub email: Option<String>,
        pub integration_url: Option<String>,
        pub active: Option<bool>,
        pub company_name: Option<String>,
        pub phone: Option<String>,
        pub public_email: Option<String>,
        pub website: Option<String>,
        pub refresh_date: Option<String>,
        pub last_refresh_attempt: Option<String>,
        pub create_date: Option<String>,
        pub modify_date: Option<String>,
        pub auto_refresh: Option<bool>,
        pub status_mappings: Vec<StatusMapping>,
    }
}

impl Entity for Store {}

impl Store {
    /// Attributes that must be set before a store can be updated.
    pub const UPDATE_REQUIRED: &'static [&'static str] =
        &["store_id", "store_name", "marketplace_id", "status_mappings"];
}

crate::wire_entity! {
    /// A ship-from location.
    pub struct Warehouse {
        pub warehouse_id: Option<i64>,
        pub warehouse_name: Option<String>,
        pub origin_address: Option<Address>,
        pub return_address: Option<Address>,
        pub create_date: Option<String>,
        pub is_default: Option<bool>,
        pub ext_inventory_identity: Option<String>,
        pub register_fedex_meter: Option<bool>,
        pub seller_integration_id: Option<Value>,
    }
}

impl Entity for Warehouse {}

impl Warehouse {
    /// Attributes that must be set before a warehouse can be updated.
    pub const UPDATE_REQUIRED: &'static [&'static str] =
        &["warehouse_id", "warehouse_name", "origin_address"];
}

crate::wire_entity! {
    /// A webhook subscription as listed by ShipStation.
    ///
    /// The list endpoint returns PascalCase keys (`WebHookID`, `IsLabelAPIHook`);
    /// they resolve against this table ignoring case.
    pub struct Webhook {
        pub active: Option<bool>,
        pub is_label_apihook: Option<bool>,
        pub web_hook_id: Option<i64>,
        pub seller_id: Option<i64>,
        pub hook_type: Option<String>,
        pub message_format: Option<String>,
        pub url: Option<String>,
        pub name: Option<String>,
        pub bulk_copy_batch_id: Option<String>,
        pub bulk_copy_record_id: Option<String>,
        pub webhook_logs: Option<Value>,
        pub seller: Option<Value>,
        pub store: Option<Value>,
        pub store_id: Option<i64>,
    }
}

impl Entity for Webhook {}

crate::wire_entity! {
    pub struct User {
        pub user_id: Option<String>,
        pub user_name: Option<String>,
        pub name: Option<String>,
    }
}

impl Entity for User {}

crate::wire_entity! {
    /// A marketplace integration ShipStation supports.
    pub struct Marketplace {
        pub marketplace_id: Option<i64>,
        pub name: Option<String>,
        pub can_refresh: Option<bool>,
        pub supports_custom_mappings: Option<bool>,
        pub supports_custom_statuses: Option<bool>,
        pub can_confirm_shipments: Option<bool>,
    }
}

impl Entity for Marketplace {}
