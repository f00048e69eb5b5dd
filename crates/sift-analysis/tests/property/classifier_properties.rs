use proptest::prelude::*;
use serde_json::{json, Value};
use sift_analysis::{RecordClassifier, ResultKind, ScoreInputs};
use sift_core::{AnalysisConfig, FixedClock, OptionsConfig};

fn classifier() -> RecordClassifier<FixedClock> {
    RecordClassifier::with_clock(AnalysisConfig::default(), FixedClock::new(0))
}

fn status() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!("active")),
        Just(json!("pending")),
        Just(json!("inactive")),
        Just(Value::Null),
    ]
}

fn record_type() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!("primary")),
        Just(json!("secondary")),
        Just(json!("tertiary")),
        Just(json!("other")),
    ]
}

fn item() -> impl Strategy<Value = Value> {
    (
        prop::option::of(0u32..5),
        prop_oneof![Just("standard"), Just("premium"), Just("basic"), Just("bogus")],
        any::<bool>(),
        0.0f64..1.0,
    )
        .prop_map(|(id, kind, important, base_score)| {
            json!({
                "id": id,
                "type": kind,
                "valid": true,
                "metadata": {
                    "k": {"important": important, "calculate_score": true, "base_score": base_score}
                }
            })
        })
}

fn record() -> impl Strategy<Value = Value> {
    (
        status(),
        record_type(),
        0i64..10,
        any::<bool>(),
        any::<bool>(),
        prop::collection::vec(item(), 0..4),
        0.5f64..1.0,
    )
        .prop_map(|(status, kind, priority, batch, auto, items, weight)| {
            json!({
                "status": status,
                "type": kind,
                "priority": priority,
                "batch_process": batch,
                "auto_process": auto,
                "items": items.clone(),
                "batch_items": items.clone(),
                "categories": [{"enabled": true, "subcategories": [{"weight": weight, "items": items}]}]
            })
        })
}

proptest! {
    #[test]
    fn total_processed_matches_data_len(
        dataset in prop::collection::vec(record(), 1..12),
        strict in any::<bool>(),
        include_inactive in any::<bool>(),
    ) {
        let options = OptionsConfig { strict, verbose: false, include_inactive };
        let result = classifier().analyze(&dataset, None, Some(&options)).unwrap();
        prop_assert_eq!(result.total_processed, result.data.len());
    }

    #[test]
    fn active_unknown_type_yields_exactly_one_unknown(kind in "[a-z]{1,8}") {
        prop_assume!(!["primary", "secondary", "tertiary"].contains(&kind.as_str()));
        let dataset = vec![json!({"status": "active", "type": kind})];
        let result = classifier().analyze(&dataset, None, None).unwrap();
        prop_assert_eq!(result.total_processed, 1);
        prop_assert_eq!(result.count_kind(ResultKind::Unknown), 1);
    }

    #[test]
    fn pending_yields_auto_pending_iff_auto_process(auto in any::<bool>()) {
        let dataset = vec![json!({"status": "pending", "auto_process": auto})];
        let result = classifier().analyze(&dataset, None, None).unwrap();
        prop_assert_eq!(result.count_kind(ResultKind::AutoPending), usize::from(auto));
        prop_assert_eq!(result.total_processed, usize::from(auto));
    }

    #[test]
    fn score_is_capped_at_one(
        base_score in -2.0f64..2.0,
        multiplier in -2.0f64..2.0,
        premium in any::<bool>(),
        featured in any::<bool>(),
        trending in any::<bool>(),
    ) {
        let inputs = ScoreInputs { base_score, multiplier, premium, featured, trending };
        prop_assert!(inputs.score() <= 1.0);
    }

    #[test]
    fn score_is_monotonic_in_flags(
        base_score in 0.0f64..1.0,
        multiplier in 0.0f64..2.0,
        premium in any::<bool>(),
        featured in any::<bool>(),
        trending in any::<bool>(),
    ) {
        let without = ScoreInputs { base_score, multiplier, premium: false, featured: false, trending: false };
        let with = ScoreInputs { base_score, multiplier, premium, featured, trending };
        prop_assert!(with.score() >= without.score());
    }
}
