//! Command implementations.
//!
//! Every command fetches entities through the async client and prints them as
//! the wire JSON ShipStation would exchange.

pub mod account;
pub mod carriers;
pub mod orders;

use serde_json::Value;
use shipstation_client::ShipStationError;
use shipstation_core::wire::{Fields, WireObject};
use shipstation_core::{Entity, MappingError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Client(#[from] ShipStationError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Output could not be rendered.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Render an entity field by field, as it was received.
///
/// Unlike [`Entity::to_wire_object`], computed overrides (such as an order's
/// total weight) are not applied.
fn render<T: Entity>(entity: &T) -> Result<Value, MappingError> {
    let mut out = WireObject::new();
    entity.write_fields(&mut out)?;
    Ok(Value::Object(out))
}

/// Print entities as a pretty JSON array of wire objects.
pub fn print_entities<T: Entity>(entities: &[T]) -> Result<(), CommandError> {
    let rendered = entities.iter().map(render).collect::<Result<Vec<_>, _>>()?;

    #[allow(clippy::print_stdout)]
    {
        println!("{}", serde_json::to_string_pretty(&Value::Array(rendered))?);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use shipstation_core::Order;

    use super::*;

    #[test]
    fn test_render_keeps_reported_order_weight() {
        let order = Order::from_wire_object(json!({
            "orderNumber": "A-1",
            "items": [{"sku": "MUG", "quantity": 2}],
            "weight": {"value": 12, "units": "ounces"},
        }))
        .unwrap();

        let rendered = render(&order).unwrap();
        assert_eq!(rendered["orderNumber"], json!("A-1"));
        assert_eq!(rendered["weight"], json!({"value": "12", "units": "ounces"}));
    }
}
