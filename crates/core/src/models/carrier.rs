//! Carriers, their packages and services, and rate quotes.

use rust_decimal::Decimal;

use crate::wire::Entity;

crate::wire_entity! {
    /// A shipping carrier account connected to ShipStation.
    pub struct Carrier {
        pub name: Option<String>,
        pub code: Option<String>,
        pub account_number: Option<String>,
        pub requires_funded_account: Option<bool>,
        pub balance: Option<Decimal>,
        pub nickname: Option<String>,
        pub shipping_provider_id: Option<i64>,
        pub primary: Option<bool>,
    }
}

impl Entity for Carrier {}

crate::wire_entity! {
    /// A package type offered by a carrier.
    pub struct CarrierPackage {
        pub carrier_code: Option<String>,
        pub code: Option<String>,
        pub name: Option<String>,
        pub domestic: Option<bool>,
        pub international: Option<bool>,
    }
}

impl Entity for CarrierPackage {}

crate::wire_entity! {
    /// A service level offered by a carrier.
    pub struct CarrierService {
        pub carrier_code: Option<String>,
        pub code: Option<String>,
        pub name: Option<String>,
        pub domestic: Option<bool>,
        pub international: Option<bool>,
    }
}

impl Entity for CarrierService {}

crate::wire_entity! {
    /// One quoted rate from a rate request.
    pub struct Rate {
        pub service_name: Option<String>,
        pub service_code: Option<String>,
        pub shipment_cost: Option<Decimal>,
        pub other_cost: Option<Decimal>,
    }
}

impl Entity for Rate {}

impl Rate {
    /// Shipment cost plus other costs.
    #[must_use]
    pub fn total_cost(&self) -> Decimal {
        self.shipment_cost.unwrap_or_default() + self.other_cost.unwrap_or_default()
    }
}
