//! Customs declaration codes for international shipments.

crate::wire_enum! {
    /// What an international package contains.
    pub enum Contents as "contents" {
        Merchandise = "merchandise",
        Documents = "documents",
        Gift = "gift",
        ReturnedGoods = "returned_goods",
        Sample = "sample",
    }
}

crate::wire_enum! {
    /// What the carrier does with an undeliverable package.
    #[derive(Default)]
    pub enum NonDelivery as "non_delivery" {
        #[default]
        ReturnToSender = "return_to_sender",
        TreatAsAbandoned = "treat_as_abandoned",
    }
}
