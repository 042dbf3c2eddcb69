//! Field-name translation between internal snake_case and wire camelCase.
//!
//! The two directions are not exact inverses. [`to_internal_name`] only splits
//! where a lowercase letter or digit is immediately followed by an uppercase
//! letter, so names with consecutive capitals or digit-only segments do not
//! come back unchanged:
//!
//! ```
//! use shipstation_core::naming::{to_internal_name, to_wire_name};
//!
//! assert_eq!(to_wire_name("custom_field_1"), "customField1");
//! assert_eq!(to_internal_name("customField1"), "custom_field1");
//! assert_eq!(to_internal_name("IsLabelAPIHook"), "is_label_apihook");
//! ```
//!
//! Entity field tables resolve declared wire names directly and only fall back
//! to [`to_internal_name`] for keys they do not know.

use std::sync::LazyLock;

use regex::Regex;

static CASE_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([a-z0-9])([A-Z])").expect("Invalid regex"));

/// Convert a snake_case name to the camelCase form used on the wire.
///
/// The input is lowercased, split on `_`, and every segment after the first is
/// title-cased. Already camelCase input is treated as a single segment, so it
/// is only idempotent for single-word names.
///
/// ```
/// use shipstation_core::naming::to_wire_name;
///
/// assert_eq!(to_wire_name("postal_code"), "postalCode");
/// assert_eq!(to_wire_name("ship_to"), "shipTo");
/// assert_eq!(to_wire_name("name"), "name");
/// ```
#[must_use]
pub fn to_wire_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut segments = lowered.split('_');
    let mut out = segments.next().unwrap_or_default().to_owned();
    for segment in segments {
        out.push_str(&title_case(segment));
    }
    out
}

/// Convert a wire (camelCase or PascalCase) name back to snake_case.
///
/// ```
/// use shipstation_core::naming::to_internal_name;
///
/// assert_eq!(to_internal_name("postalCode"), "postal_code");
/// assert_eq!(to_internal_name("WebHookID"), "web_hook_id");
/// ```
#[must_use]
pub fn to_internal_name(name: &str) -> String {
    CASE_BOUNDARY_RE
        .replace_all(name, "${1}_${2}")
        .to_lowercase()
}

/// Title-case a segment: the first letter of every alphabetic run is
/// uppercased, every other letter lowercased.
fn title_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut previous_alphabetic = false;
    for c in segment.chars() {
        if c.is_alphabetic() {
            if previous_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            out.push(c);
            previous_alphabetic = false;
        }
    }
    out
}
