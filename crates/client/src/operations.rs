//! Request builders and response parsers shared by both facades.
//!
//! Every remote operation is split in two: a `build_*` function that validates
//! the caller's input and shapes it into a [`Request`], and a parser that turns
//! the [`RawResponse`] into entities. Neither side performs I/O, so the async
//! and blocking clients stay in lockstep by construction.

use serde_json::Value;
use shipstation_core::naming::to_wire_name;
use shipstation_core::validate::{
    check_parameter_keys, require_parameters, require_type, validate_parameters,
};
use shipstation_core::wire::WireObject;
use shipstation_core::{
    Entity, MappingError, Order, Page, ParamKind, Params, Payload, Store, Warehouse,
    WebhookEvent, to_object_list,
};

use crate::error::ShipStationError;
use crate::transport::{RawResponse, Request};

/// Filters accepted by `fetch_orders`.
pub const ORDER_LIST_PARAMETERS: &[&str] = &[
    "customer_name",
    "item_keyword",
    "create_date_start",
    "create_date_end",
    "modify_date_start",
    "modify_date_end",
    "order_date_start",
    "order_date_end",
    "order_number",
    "order_status",
    "payment_date_start",
    "payment_date_end",
    "store_id",
    "sort_by",
    "sort_dir",
    "page",
    "page_size",
];

/// Filters accepted by `list_customers`.
pub const CUSTOMER_LIST_PARAMETERS: &[&str] = &[
    "state_code",
    "country_code",
    "marketplace_id",
    "tag_id",
    "sort_by",
    "sort_dir",
    "page",
    "page_size",
];

/// Filters accepted by `list_fulfillments`.
pub const FULFILLMENT_LIST_PARAMETERS: &[&str] = &[
    "fulfillment_id",
    "order_id",
    "order_number",
    "tracking_number",
    "recipient_name",
    "create_date_start",
    "create_date_end",
    "ship_date_start",
    "ship_date_end",
    "sort_by",
    "sort_dir",
    "page",
    "page_size",
];

/// Filters accepted by `list_shipments`.
pub const SHIPMENT_LIST_PARAMETERS: &[&str] = &[
    "recipient_name",
    "recipient_country_code",
    "order_number",
    "order_id",
    "carrier_code",
    "service_code",
    "tracking_number",
    "create_date_start",
    "create_date_end",
    "ship_date_start",
    "ship_date_end",
    "void_date_start",
    "void_date_end",
    "store_id",
    "include_shipment_items",
    "sort_by",
    "sort_dir",
    "page",
    "page_size",
];

/// Options accepted by `create_shipment_label`.
pub const CREATE_SHIPMENT_LABEL_OPTIONS: &[&str] = &[
    "carrier_code",
    "service_code",
    "package_code",
    "confirmation",
    "ship_date",
    "weight",
    "dimensions",
    "ship_from",
    "ship_to",
    "insurance_options",
    "international_options",
    "advanced_options",
    "test_label",
];

/// Options accepted by `get_rates`.
pub const GET_RATE_OPTIONS: &[&str] = &[
    "carrier_code",
    "service_code",
    "package_code",
    "from_postal_code",
    "to_state",
    "to_country",
    "to_postal_code",
    "to_city",
    "weight",
    "dimensions",
    "confirmation",
    "residential",
];

/// Options `get_rates` cannot do without.
pub const REQUIRED_RATE_OPTIONS: &[&str] = &[
    "carrier_code",
    "from_postal_code",
    "to_country",
    "to_postal_code",
    "weight",
    "dimensions",
];

/// Options accepted by `create_warehouse`.
pub const CREATE_WAREHOUSE_OPTIONS: &[&str] = &[
    "warehouse_name",
    "origin_address",
    "return_address",
    "is_default",
];

/// Options accepted by `subscribe_to_webhook`. Sent with these exact keys.
pub const SUBSCRIBE_TO_WEBHOOK_OPTIONS: &[&str] =
    &["target_url", "event", "store_id", "friendly_name"];

/// Create-order path, also used by batch submission.
pub const CREATE_ORDER_PATH: &str = "/orders/createorder";

// Orders

/// # Errors
///
/// Returns [`MappingError::InvalidParameterKey`] for unknown filters.
pub fn build_fetch_orders(params: &Params) -> Result<Request, MappingError> {
    list_request("/orders/list", params, ORDER_LIST_PARAMETERS)
}

#[must_use]
pub fn build_get_order(order_id: i64) -> Request {
    Request::get(format!("/orders/{order_id}"))
}

/// # Errors
///
/// Returns an error if the order cannot be serialized.
pub fn build_create_order(order: &Order) -> Result<Request, MappingError> {
    Ok(Request::post(CREATE_ORDER_PATH, order.to_wire_json()?))
}

// Carriers

#[must_use]
pub fn build_list_carriers() -> Request {
    Request::get("/carriers")
}

#[must_use]
pub fn build_get_carrier(carrier_code: &str) -> Request {
    Request::get("/carriers/getcarrier").with_query([("carrierCode", carrier_code)])
}

#[must_use]
pub fn build_list_packages(carrier_code: &str) -> Request {
    Request::get("/carriers/listpackages").with_query([("carrierCode", carrier_code)])
}

#[must_use]
pub fn build_list_services(carrier_code: &str) -> Request {
    Request::get("/carriers/listservices").with_query([("carrierCode", carrier_code)])
}

// Customers and fulfillments

#[must_use]
pub fn build_get_customer(customer_id: i64) -> Request {
    Request::get(format!("/customers/{customer_id}"))
}

/// # Errors
///
/// Returns [`MappingError::InvalidParameterKey`] for unknown filters.
pub fn build_list_customers(params: &Params) -> Result<Request, MappingError> {
    list_request("/customers", params, CUSTOMER_LIST_PARAMETERS)
}

/// # Errors
///
/// Returns [`MappingError::InvalidParameterKey`] for unknown filters.
pub fn build_list_fulfillments(params: &Params) -> Result<Request, MappingError> {
    list_request("/fulfillments", params, FULFILLMENT_LIST_PARAMETERS)
}

// Shipments

/// # Errors
///
/// Returns [`MappingError::InvalidParameterKey`] for unknown filters.
pub fn build_list_shipments(params: &Params) -> Result<Request, MappingError> {
    list_request("/shipments", params, SHIPMENT_LIST_PARAMETERS)
}

/// Validate label options and build the create-label request.
///
/// `weight` and `dimensions` are required; `ship_to`, `ship_from`, and the
/// option blocks must hold their entity types when present.
///
/// # Errors
///
/// Returns a [`MappingError`] for unknown keys, missing weight or dimensions,
/// or a value of the wrong kind.
pub fn build_create_shipment_label(options: &Params) -> Result<Request, MappingError> {
    check_parameter_keys(options, CREATE_SHIPMENT_LABEL_OPTIONS)?;
    require_parameters(options, &["weight", "dimensions"], "shipment label")?;
    for (field, kind) in [
        ("weight", ParamKind::Weight),
        ("dimensions", ParamKind::Dimensions),
        ("ship_to", ParamKind::Address),
        ("ship_from", ParamKind::Address),
        ("international_options", ParamKind::InternationalOptions),
        ("advanced_options", ParamKind::AdvancedOptions),
        ("insurance_options", ParamKind::InsuranceOptions),
    ] {
        require_type(field, options.get(field), kind)?;
    }
    let body = validate_parameters(options, CREATE_SHIPMENT_LABEL_OPTIONS)?;
    post_json("/shipments/createlabel", body)
}

/// Validate rate options and build the get-rates request.
///
/// # Errors
///
/// Returns a [`MappingError`] for a mistyped weight or dimensions, unknown
/// keys, or a missing entry of [`REQUIRED_RATE_OPTIONS`].
pub fn build_get_rates(options: &Params) -> Result<Request, MappingError> {
    require_type("weight", options.get("weight"), ParamKind::Weight)?;
    require_type("dimensions", options.get("dimensions"), ParamKind::Dimensions)?;
    let body = validate_parameters(options, GET_RATE_OPTIONS)?;
    require_parameters(options, REQUIRED_RATE_OPTIONS, "rate request")?;
    post_json("/shipments/getrates", body)
}

/// # Errors
///
/// Returns an error if the body cannot be serialized.
pub fn build_void_label(shipment_id: i64) -> Result<Request, MappingError> {
    id_request("/shipments/voidlabel", "shipmentId", shipment_id)
}

// Stores

#[must_use]
pub fn build_list_marketplaces() -> Request {
    Request::get("/stores/marketplaces")
}

/// `showInactive` is only sent when true.
#[must_use]
pub fn build_list_stores(show_inactive: bool, marketplace_id: Option<i64>) -> Request {
    let mut query = Vec::new();
    if show_inactive {
        query.push(("showInactive", "true".to_owned()));
    }
    if let Some(id) = marketplace_id {
        query.push(("marketplaceId", id.to_string()));
    }
    Request::get("/stores").with_query(query)
}

#[must_use]
pub fn build_get_store(store_id: i64) -> Request {
    Request::get(format!("/stores/{store_id}"))
}

/// Check a store is complete and build the update request.
///
/// # Errors
///
/// Returns [`MappingError::MissingRequiredField`] if any of
/// [`Store::UPDATE_REQUIRED`] is unset, or a status mapping has no order
/// status.
pub fn build_update_store(store: &Store) -> Result<Request, MappingError> {
    for field in Store::UPDATE_REQUIRED {
        store.require_attribute(field)?;
    }
    if store
        .status_mappings
        .iter()
        .any(|mapping| mapping.order_status.is_none())
    {
        return Err(MappingError::missing("StatusMapping", "order_status"));
    }
    let store_id = store
        .store_id
        .ok_or_else(|| MappingError::missing("Store", "store_id"))?;
    Ok(Request::put(
        format!("/stores/{store_id}"),
        store.to_wire_json()?,
    ))
}

/// # Errors
///
/// Returns an error if the body cannot be serialized.
pub fn build_deactivate_store(store_id: i64) -> Result<Request, MappingError> {
    id_request("/stores/deactivate", "storeId", store_id)
}

/// # Errors
///
/// Returns an error if the body cannot be serialized.
pub fn build_reactivate_store(store_id: i64) -> Result<Request, MappingError> {
    id_request("/stores/reactivate", "storeId", store_id)
}

// Users

#[must_use]
pub fn build_list_users(show_inactive: bool) -> Request {
    Request::get("/users").with_query([("showInactive", show_inactive.to_string())])
}

// Warehouses

#[must_use]
pub fn build_get_warehouse(warehouse_id: i64) -> Request {
    Request::get(format!("/warehouses/{warehouse_id}"))
}

#[must_use]
pub fn build_list_warehouses() -> Request {
    Request::get("/warehouses")
}

/// Validate warehouse options and build the create request.
///
/// # Errors
///
/// Returns a [`MappingError`] for unknown keys, a missing origin address, or
/// a value of the wrong kind.
pub fn build_create_warehouse(options: &Params) -> Result<Request, MappingError> {
    check_parameter_keys(options, CREATE_WAREHOUSE_OPTIONS)?;
    require_parameters(options, &["origin_address"], "warehouse")?;
    require_type("origin_address", options.get("origin_address"), ParamKind::Address)?;
    require_type("return_address", options.get("return_address"), ParamKind::Address)?;
    require_type("is_default", options.get("is_default"), ParamKind::Bool)?;
    let body = validate_parameters(options, CREATE_WAREHOUSE_OPTIONS)?;
    post_json("/warehouses/createwarehouse", body)
}

/// Check a warehouse is complete and build the update request.
///
/// # Errors
///
/// Returns [`MappingError::MissingRequiredField`] if any of
/// [`Warehouse::UPDATE_REQUIRED`] is unset.
pub fn build_update_warehouse(warehouse: &Warehouse) -> Result<Request, MappingError> {
    for field in Warehouse::UPDATE_REQUIRED {
        warehouse.require_attribute(field)?;
    }
    let warehouse_id = warehouse
        .warehouse_id
        .ok_or_else(|| MappingError::missing("Warehouse", "warehouse_id"))?;
    Ok(Request::put(
        format!("/warehouses/{warehouse_id}"),
        warehouse.to_wire_json()?,
    ))
}

#[must_use]
pub fn build_delete_warehouse(warehouse_id: i64) -> Request {
    Request::delete(format!("/warehouses/{warehouse_id}"))
}

// Webhooks

#[must_use]
pub fn build_list_webhooks() -> Request {
    Request::get("/webhooks")
}

/// Validate subscription options and build the subscribe request.
///
/// Keys are sent exactly as given (`target_url`, not `targetUrl`).
///
/// # Errors
///
/// Returns a [`MappingError`] for unknown keys, a missing `target_url` or
/// `event`, or an event outside [`WebhookEvent::VALUES`].
pub fn build_subscribe_to_webhook(options: &Params) -> Result<Request, MappingError> {
    check_parameter_keys(options, SUBSCRIBE_TO_WEBHOOK_OPTIONS)?;
    require_parameters(options, &["target_url", "event"], "webhook subscription")?;
    require_type("event", options.get("event"), ParamKind::Text)?;
    if let Some(event) = options.get("event").and_then(|p| p.as_text()) {
        WebhookEvent::parse(event)?;
    }

    let body = options
        .iter()
        .map(|(key, value)| Ok((key.to_owned(), value.to_wire()?)))
        .collect::<Result<WireObject, MappingError>>()?;
    post_json("/webhooks/subscribe", body)
}

#[must_use]
pub fn build_unsubscribe_from_webhook(webhook_id: i64) -> Request {
    Request::delete(format!("/webhooks/{webhook_id}"))
}

// Parsers
//
// Parsers decode whatever body came back, whatever the status. Operations
// returning a `RawResponse` can opt in with `RawResponse::error_for_status`.

fn into_payload(response: RawResponse) -> Payload {
    if !response.is_success() {
        tracing::warn!(status = %response.status, "Decoding non-success response");
    }
    response.payload
}

/// Parse a single entity from a response body.
///
/// # Errors
///
/// Returns an error for a body that is not an object.
pub fn parse_entity<T: Entity>(response: RawResponse) -> Result<T, ShipStationError> {
    Ok(T::from_wire_object(into_payload(response))?)
}

/// Parse a list of entities from a response body.
///
/// # Errors
///
/// Returns an error for a body that is not an object or list.
pub fn parse_list<T: Entity>(response: RawResponse) -> Result<Vec<T>, ShipStationError> {
    Ok(to_object_list(into_payload(response))?)
}

/// Parse a list envelope, taking the entities from `key`.
///
/// # Errors
///
/// Returns an error for a malformed envelope.
pub fn parse_page<T: Entity>(response: RawResponse, key: &str) -> Result<Page<T>, ShipStationError> {
    Ok(Page::from_payload(into_payload(response), key)?)
}

// Helpers

fn list_request(path: &str, params: &Params, allowed: &[&str]) -> Result<Request, MappingError> {
    let filters = validate_parameters(params, allowed)?;
    Ok(Request::get(path).with_query(query_pairs(filters)))
}

/// Flatten a wire object into query pairs, dropping nulls.
fn query_pairs(object: WireObject) -> Vec<(String, String)> {
    object
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(text) => Some((key, text)),
            other => Some((key, other.to_string())),
        })
        .collect()
}

fn post_json(path: &str, body: WireObject) -> Result<Request, MappingError> {
    Ok(Request::post(path, serde_json::to_string(&Value::Object(body))?))
}

/// `{"<key>": "<id>"}`, with the id coerced to a string like every other
/// wire scalar.
fn id_request(path: &str, key: &str, id: i64) -> Result<Request, MappingError> {
    let mut body = WireObject::new();
    body.insert(to_wire_name(key), Value::String(id.to_string()));
    post_json(path, body)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use reqwest::{Method, StatusCode};
    use rust_decimal::Decimal;
    use serde_json::json;
    use shipstation_core::{
        Address, Carrier, Dimensions, OrderStatus, StatusMapping, Weight, WeightUnit,
    };

    use super::*;

    fn body(request: &Request) -> Value {
        serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
    }

    fn rate_options() -> Params {
        Params::new()
            .with("carrier_code", "fedex")
            .with("from_postal_code", "78703")
            .with("to_country", "US")
            .with("to_postal_code", "20500")
            .with("weight", Weight::with_unit(Decimal::new(3, 0), WeightUnit::Pounds))
            .with("dimensions", Dimensions::default())
    }

    #[test]
    fn test_fetch_orders_query() {
        let params = Params::new().with("order_status", "shipped").with("page", 2);
        let request = build_fetch_orders(&params).unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/orders/list");
        assert_eq!(
            request.query,
            vec![
                ("orderStatus".to_owned(), "shipped".to_owned()),
                ("page".to_owned(), "2".to_owned()),
            ]
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_fetch_orders_rejects_unknown_filter() {
        let params = Params::new().with("order_colour", "red");
        assert!(matches!(
            build_fetch_orders(&params),
            Err(MappingError::InvalidParameterKey { ref keys }) if keys == &["order_colour"]
        ));
    }

    #[test]
    fn test_carrier_queries() {
        let request = build_list_services("ups");
        assert_eq!(request.path, "/carriers/listservices");
        assert_eq!(request.query, vec![("carrierCode".to_owned(), "ups".to_owned())]);
    }

    #[test]
    fn test_list_stores_query() {
        assert!(build_list_stores(false, None).query.is_empty());
        assert_eq!(
            build_list_stores(true, Some(7)).query,
            vec![
                ("showInactive".to_owned(), "true".to_owned()),
                ("marketplaceId".to_owned(), "7".to_owned()),
            ]
        );
    }

    #[test]
    fn test_list_users_always_sends_flag() {
        assert_eq!(
            build_list_users(false).query,
            vec![("showInactive".to_owned(), "false".to_owned())]
        );
    }

    #[test]
    fn test_id_bodies_are_strings() {
        assert_eq!(body(&build_void_label(12345).unwrap()), json!({"shipmentId": "12345"}));
        let request = build_deactivate_store(9).unwrap();
        assert_eq!(request.path, "/stores/deactivate");
        assert_eq!(body(&request), json!({"storeId": "9"}));
    }

    #[test]
    fn test_shipment_label_requires_weight_and_dimensions() {
        let options = Params::new().with("carrier_code", "fedex");
        assert!(matches!(
            build_create_shipment_label(&options),
            Err(MappingError::MissingRequiredField { ref field, .. }) if field == "weight"
        ));
    }

    #[test]
    fn test_shipment_label_rejects_bare_address() {
        let options = Params::new()
            .with("weight", Weight::with_unit(Decimal::ONE, WeightUnit::Ounces))
            .with("dimensions", Dimensions::default())
            .with("ship_to", WireObject::new());
        assert!(matches!(
            build_create_shipment_label(&options),
            Err(MappingError::TypeMismatch {
                expected: ParamKind::Address,
                found: ParamKind::Object,
                ..
            })
        ));
    }

    #[test]
    fn test_shipment_label_body() {
        let options = Params::new()
            .with("carrier_code", "fedex")
            .with("test_label", true)
            .with("weight", Weight::with_unit(Decimal::new(16, 0), WeightUnit::Ounces))
            .with("dimensions", Dimensions::default())
            .with("ship_to", Address::default());
        let request = build_create_shipment_label(&options).unwrap();
        let body = body(&request);
        assert_eq!(body["carrierCode"], json!("fedex"));
        assert_eq!(body["testLabel"], json!("true"));
        assert_eq!(body["weight"], json!({"value": "16", "units": "ounces"}));
        assert!(body["shipTo"].is_object());
    }

    #[test]
    fn test_get_rates_checks_types_before_keys() {
        let options = Params::new().with("weight", "3 lb").with("bogus", 1);
        assert!(matches!(
            build_get_rates(&options),
            Err(MappingError::TypeMismatch { ref field, .. }) if field == "weight"
        ));
    }

    #[test]
    fn test_get_rates_requires_destination() {
        let mut options = rate_options();
        options.insert("to_postal_code", "");
        let err = build_get_rates(&options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'to_postal_code' is a required attribute of rate request"
        );
        assert!(build_get_rates(&rate_options()).is_ok());
    }

    #[test]
    fn test_get_rates_service_and_package_are_optional() {
        let request = build_get_rates(&rate_options()).unwrap();
        let sent = body(&request);
        assert!(sent.get("serviceCode").is_none());
        assert!(sent.get("packageCode").is_none());

        let narrowed = rate_options()
            .with("service_code", "fedex_ground")
            .with("package_code", "package");
        let sent = body(&build_get_rates(&narrowed).unwrap());
        assert_eq!(sent["serviceCode"], json!("fedex_ground"));
        assert_eq!(sent["packageCode"], json!("package"));
    }

    #[test]
    fn test_create_warehouse() {
        let missing = Params::new().with("warehouse_name", "Main");
        assert!(matches!(
            build_create_warehouse(&missing),
            Err(MappingError::MissingRequiredField { ref field, .. }) if field == "origin_address"
        ));

        let bad_default = Params::new()
            .with("origin_address", Address::default())
            .with("is_default", "yes");
        assert!(matches!(
            build_create_warehouse(&bad_default),
            Err(MappingError::TypeMismatch { expected: ParamKind::Bool, .. })
        ));

        let options = Params::new()
            .with("warehouse_name", "Main")
            .with("origin_address", Address::default())
            .with("is_default", false);
        let request = build_create_warehouse(&options).unwrap();
        assert_eq!(request.path, "/warehouses/createwarehouse");
        let body = body(&request);
        assert_eq!(body["isDefault"], json!("false"));
        assert!(body["originAddress"].is_object());
    }

    #[test]
    fn test_update_store_requires_fields() {
        let store = Store {
            store_id: Some(1),
            store_name: Some("Shop".to_owned()),
            ..Store::default()
        };
        assert!(matches!(
            build_update_store(&store),
            Err(MappingError::MissingRequiredField { entity: "Store", ref field }) if field == "marketplace_id"
        ));

        let store = Store {
            marketplace_id: Some(2),
            status_mappings: vec![StatusMapping::new(OrderStatus::Shipped, "SHIPPED")],
            ..store
        };
        let request = build_update_store(&store).unwrap();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "/stores/1");
        assert_eq!(
            body(&request)["statusMappings"],
            json!([{"orderStatus": "shipped", "statusKey": "SHIPPED"}])
        );
    }

    #[test]
    fn test_update_store_rejects_mapping_without_status() {
        let store = Store {
            store_id: Some(1),
            store_name: Some("Shop".to_owned()),
            marketplace_id: Some(2),
            status_mappings: vec![StatusMapping::default()],
            ..Store::default()
        };
        assert!(matches!(
            build_update_store(&store),
            Err(MappingError::MissingRequiredField { entity: "StatusMapping", .. })
        ));
    }

    #[test]
    fn test_update_warehouse_path() {
        let warehouse = Warehouse {
            warehouse_id: Some(44),
            warehouse_name: Some("Back room".to_owned()),
            origin_address: Some(Address::default()),
            ..Warehouse::default()
        };
        let request = build_update_warehouse(&warehouse).unwrap();
        assert_eq!(request.path, "/warehouses/44");
        assert!(build_update_warehouse(&Warehouse::default()).is_err());
    }

    #[test]
    fn test_subscribe_keeps_keys_verbatim() {
        let options = Params::new()
            .with("target_url", "https://example.com/hook")
            .with("event", "ORDER_NOTIFY")
            .with("store_id", 5);
        let request = build_subscribe_to_webhook(&options).unwrap();
        assert_eq!(
            body(&request),
            json!({
                "event": "ORDER_NOTIFY",
                "store_id": "5",
                "target_url": "https://example.com/hook",
            })
        );
    }

    #[test]
    fn test_subscribe_validation() {
        let unknown = Params::new()
            .with("target_url", "https://example.com")
            .with("event", "ORDER_NOTIFY")
            .with("secret", "x");
        assert!(matches!(
            build_subscribe_to_webhook(&unknown),
            Err(MappingError::InvalidParameterKey { .. })
        ));

        let missing = Params::new().with("event", "ORDER_NOTIFY");
        assert!(matches!(
            build_subscribe_to_webhook(&missing),
            Err(MappingError::MissingRequiredField { ref field, .. }) if field == "target_url"
        ));

        let bad_event = Params::new()
            .with("target_url", "https://example.com")
            .with("event", "ORDER_SHIPPED");
        assert!(matches!(
            build_subscribe_to_webhook(&bad_event),
            Err(MappingError::InvalidEnumValue { field: "event", .. })
        ));
    }

    #[test]
    fn test_query_pairs_skip_nulls() {
        let mut object = WireObject::new();
        object.insert("storeId".to_owned(), Value::Null);
        object.insert("sortDir".to_owned(), json!("ASC"));
        object.insert("tagIds".to_owned(), json!(["1", "2"]));
        assert_eq!(
            query_pairs(object),
            vec![
                ("sortDir".to_owned(), "ASC".to_owned()),
                ("tagIds".to_owned(), r#"["1","2"]"#.to_owned()),
            ]
        );
    }

    #[test]
    fn test_parse_entity_decodes_error_status() {
        let response = RawResponse {
            status: StatusCode::BAD_REQUEST,
            payload: Payload::from_value(json!({"orderId": 7, "Message": "bad order"})),
        };
        let order = parse_entity::<Order>(response).unwrap();
        assert_eq!(order.order_id, Some(7));
    }

    #[test]
    fn test_parse_entity_rejects_text_body() {
        let response = RawResponse {
            status: StatusCode::UNAUTHORIZED,
            payload: Payload::Text("401 Unauthorized".to_owned()),
        };
        let err = parse_entity::<Order>(response).unwrap_err();
        assert!(matches!(
            err,
            ShipStationError::Mapping(MappingError::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn test_parse_list_accepts_single_object() {
        let response = RawResponse {
            status: StatusCode::OK,
            payload: Payload::from_value(json!({"name": "FedEx", "code": "fedex"})),
        };
        let carriers = parse_list::<Carrier>(response).unwrap();
        assert_eq!(carriers.len(), 1);
        assert_eq!(carriers[0].code.as_deref(), Some("fedex"));
    }

    #[test]
    fn test_parse_page() {
        let response = RawResponse {
            status: StatusCode::OK,
            payload: Payload::from_value(json!({
                "orders": [{"orderId": 1}, {"orderId": 2}],
                "total": 2,
                "page": 1,
                "pages": 1,
            })),
        };
        let page = parse_page::<Order>(response, "orders").unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].order_id, Some(2));
        assert!(!page.has_next_page());
    }
}
