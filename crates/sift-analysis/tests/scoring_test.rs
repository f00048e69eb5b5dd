//! Tests for the importance score calculator and category buckets.

use serde_json::json;
use sift_analysis::{importance_score, ImportanceCategory, ScoreInputs};
use sift_core::{ClassifyError, SiftErrorCode};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_defaults_give_half_score() {
    let score = importance_score(&json!({"id": 1}), &json!({})).unwrap();
    assert!(approx(score, 0.5));
    assert_eq!(ScoreInputs::default().score(), 0.5);
}

#[test]
fn test_all_bonuses_saturate_at_one() {
    let item = json!({"id": 1, "premium": true, "featured": true, "trending": true});
    let value = json!({"base_score": 0.9});
    let inputs = ScoreInputs::from_item(&item, &value).unwrap();
    assert!(approx(inputs.bonus(), 0.45));

    let score = importance_score(&item, &value).unwrap();
    assert_eq!(score, 1.0);
    assert_eq!(ImportanceCategory::from_score(score), ImportanceCategory::High);
}

#[test]
fn test_bonuses_are_independent() {
    let base = json!({"base_score": 0.1});
    let cases = [
        (json!({"premium": true}), 0.3),
        (json!({"featured": true}), 0.2),
        (json!({"trending": true}), 0.25),
        (json!({"premium": true, "trending": true}), 0.45),
    ];
    for (item, expected) in cases {
        let score = importance_score(&item, &base).unwrap();
        assert!(approx(score, expected), "{item}: {score} != {expected}");
    }
}

#[test]
fn test_multiplier_comes_from_item() {
    let item = json!({"multiplier": 1.5});
    let score = importance_score(&item, &json!({"base_score": 0.4})).unwrap();
    assert!(approx(score, 0.6));
    // A multiplier on the metadata value is ignored.
    let score = importance_score(&json!({}), &json!({"base_score": 0.4, "multiplier": 2})).unwrap();
    assert!(approx(score, 0.4));
}

#[test]
fn test_non_numeric_inputs_are_errors() {
    let err = importance_score(&json!({"id": "a"}), &json!({"base_score": null})).unwrap_err();
    assert_eq!(
        err,
        ClassifyError::NonNumericField {
            field: "base_score".to_string(),
            item_id: "a".to_string(),
        }
    );
    assert_eq!(err.error_code(), "NON_NUMERIC_FIELD");

    let err = importance_score(&json!({"id": 7, "multiplier": "x"}), &json!({})).unwrap_err();
    assert_eq!(
        err,
        ClassifyError::NonNumericField {
            field: "multiplier".to_string(),
            item_id: "7".to_string(),
        }
    );
}

#[test]
fn test_boolean_inputs_count_as_one_and_zero() {
    let score = importance_score(&json!({"id": 1}), &json!({"base_score": true})).unwrap();
    assert_eq!(score, 1.0);
    assert_eq!(ImportanceCategory::from_score(score), ImportanceCategory::High);

    let score = importance_score(&json!({"multiplier": false}), &json!({"base_score": 0.9})).unwrap();
    assert_eq!(score, 0.0);
}

#[test]
fn test_negative_overflow_is_not_finite() {
    let item = json!({"id": "big", "multiplier": 1e308});
    let err = importance_score(&item, &json!({"base_score": -1e308})).unwrap_err();
    assert_eq!(err.error_code(), "NON_FINITE_SCORE");
}

#[test]
fn test_category_boundaries() {
    assert_eq!(ImportanceCategory::from_score(0.81), ImportanceCategory::High);
    assert_eq!(ImportanceCategory::from_score(0.8), ImportanceCategory::Medium);
    assert_eq!(ImportanceCategory::from_score(0.51), ImportanceCategory::Medium);
    assert_eq!(ImportanceCategory::from_score(0.5), ImportanceCategory::Low);
    assert_eq!(ImportanceCategory::from_score(-3.0), ImportanceCategory::Low);
}
