//! Tests for the item validator.

use serde_json::json;
use sift_analysis::validate;

#[test]
fn test_accepts_minimal_item() {
    assert!(validate(&json!({"id": "x", "type": "standard"})));
    assert!(validate(&json!({"id": 3, "type": "premium", "valid": true})));
    assert!(validate(&json!({"id": "b", "type": "basic", "valid": "yes"})));
}

#[test]
fn test_rejects_missing_or_falsy_id() {
    assert!(!validate(&json!({"type": "standard"})));
    assert!(!validate(&json!({"id": "", "type": "standard"})));
    assert!(!validate(&json!({"id": 0, "type": "standard"})));
    assert!(!validate(&json!({"id": null, "type": "standard"})));
}

#[test]
fn test_rejects_invalid_flag() {
    assert!(!validate(&json!({"id": "x", "type": "standard", "valid": false})));
    assert!(!validate(&json!({"id": "x", "type": "standard", "valid": null})));
    assert!(!validate(&json!({"id": "x", "type": "standard", "valid": 0})));
}

#[test]
fn test_rejects_unknown_type() {
    assert!(!validate(&json!({"id": "x"})));
    assert!(!validate(&json!({"id": "x", "type": "Standard"})));
    assert!(!validate(&json!({"id": "x", "type": "gold"})));
    assert!(!validate(&json!({"id": "x", "type": 1})));
}

#[test]
fn test_rejects_absent_and_non_mapping_items() {
    assert!(!validate(&json!(null)));
    assert!(!validate(&json!("standard")));
    assert!(!validate(&json!([{"id": "x", "type": "standard"}])));
}
