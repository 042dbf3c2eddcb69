//! Units of measure.

crate::wire_enum! {
    /// Units a weight can be expressed in.
    pub enum WeightUnit as "units" {
        Pounds = "pounds",
        Ounces = "ounces",
        Grams = "grams",
    }
}

crate::wire_enum! {
    /// Units for package dimensions.
    pub enum DimensionUnit as "units" {
        Inches = "inches",
        Centimeters = "centimeters",
    }
}
