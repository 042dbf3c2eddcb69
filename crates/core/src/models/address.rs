use crate::wire::Entity;

crate::wire_entity! {
    /// A postal address used for ship-to, bill-to, and warehouse locations.
    pub struct Address {
        pub name: Option<String>,
        pub company: Option<String>,
        pub street1: Option<String>,
        pub street2: Option<String>,
        pub street3: Option<String>,
        pub city: Option<String>,
        pub state: Option<String>,
        pub postal_code: Option<String>,
        /// Two-letter ISO country code.
        pub country: Option<String>,
        pub phone: Option<String>,
        pub residential: Option<bool>,
        /// Verification result reported by ShipStation (read-only).
        pub address_verified: Option<String>,
    }
}

impl Entity for Address {}
