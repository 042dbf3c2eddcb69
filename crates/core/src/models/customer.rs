use serde_json::Value;

use crate::wire::Entity;

crate::wire_entity! {
    /// A customer record aggregated from orders.
    pub struct Customer {
        pub customer_id: Option<i64>,
        pub create_date: Option<String>,
        pub modify_date: Option<String>,
        pub name: Option<String>,
        pub company: Option<String>,
        pub street1: Option<String>,
        pub street2: Option<String>,
        pub city: Option<String>,
        pub state: Option<String>,
        pub postal_code: Option<String>,
        pub country_code: Option<String>,
        pub phone: Option<String>,
        pub email: Option<String>,
        pub address_verified: Option<String>,
        pub marketplace_usernames: Vec<MarketplaceUsername>,
        /// Tag objects, passed through as-is.
        pub tags: Option<Value>,
    }
}

impl Entity for Customer {}

crate::wire_entity! {
    /// The customer's username on one marketplace.
    pub struct MarketplaceUsername {
        pub customer_user_id: Option<i64>,
        pub customer_id: Option<i64>,
        pub marketplace: Option<String>,
        pub marketplace_id: Option<i64>,
        pub username: Option<String>,
        pub create_date: Option<String>,
        pub modify_date: Option<String>,
    }
}

impl Entity for MarketplaceUsername {}
