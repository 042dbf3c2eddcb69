//! ShipStation resource entities.
//!
//! Every entity is a plain struct of optional fields declared through
//! [`wire_entity!`](crate::wire_entity); nested entities are owned by value and
//! converted recursively.

mod account;
mod address;
mod carrier;
mod customer;
mod fulfillment;
mod order;
mod shipping;

pub use account::{Marketplace, StatusMapping, Store, User, Warehouse, Webhook};
pub use address::Address;
pub use carrier::{Carrier, CarrierPackage, CarrierService, Rate};
pub use customer::{Customer, MarketplaceUsername};
pub use fulfillment::Fulfillment;
pub use order::{Item, Order};
pub use shipping::{
    AdvancedOptions, CustomsItem, Dimensions, InsuranceOptions, InternationalOptions, Weight,
};
