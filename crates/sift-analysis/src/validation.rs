//! Item validator shared by the medium-priority and batch paths.

use serde_json::Value;

use sift_core::constants::VALID_ITEM_TYPES;

use crate::record::truthy;

/// An item is valid when it is a mapping with a truthy `id`, a truthy
/// `valid` flag (absent counts as true), and a `type` of `standard`,
/// `premium` or `basic`.
pub fn validate(item: &Value) -> bool {
    let Some(fields) = item.as_object() else {
        return false;
    };
    fields.get("id").is_some_and(truthy)
        && fields.get("valid").map_or(true, truthy)
        && fields
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|t| VALID_ITEM_TYPES.contains(&t))
}
