//! Defaulting accessors over semi-structured JSON records.
//!
//! Every lookup tolerates missing keys and wrong value types by falling back
//! to the field's default, so no accessor can fail.

use serde_json::Value;

/// Truthiness for flag fields: `null`, `false`, `0`, `""`, `[]` and `{}` are
/// false, everything else is true.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Flag lookup where an absent key reads as `false`.
pub fn flag(value: &Value, key: &str) -> bool {
    flag_or(value, key, false)
}

/// Flag lookup where an absent key reads as `default`. A key that is present
/// (even as `null`) is judged by [`truthy`].
pub fn flag_or(value: &Value, key: &str, default: bool) -> bool {
    value.get(key).map_or(default, truthy)
}

/// Numeric reading of a value. Booleans count as 1 and 0.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        other => other.as_f64(),
    }
}

/// Numeric lookup; absent or non-numeric values read as `default`.
pub fn number_or(value: &Value, key: &str, default: f64) -> f64 {
    value.get(key).and_then(as_number).unwrap_or(default)
}

/// Sequence lookup; absent or non-array values read as empty.
pub fn sequence<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// The `id` field, or `null` when absent.
pub fn id_of(value: &Value) -> Value {
    value.get("id").cloned().unwrap_or(Value::Null)
}

/// Human-readable `id` for diagnostics.
pub fn id_label(value: &Value) -> String {
    match value.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "null".to_string(),
    }
}

/// Record status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    Active,
    Pending,
    /// Inactive, unspecified, or anything unrecognized.
    Other,
}

/// Record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordType {
    Primary,
    Secondary,
    Tertiary,
    /// Unrecognized type, carrying its raw text (`None` when absent).
    Other(Option<String>),
}

impl RecordType {
    pub fn name(&self) -> &str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Other(Some(raw)) => raw,
            Self::Other(None) => "none",
        }
    }
}

/// Typed read-only view of one dataset record.
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    raw: &'a Value,
}

impl<'a> RecordView<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    pub fn id(&self) -> Value {
        id_of(self.raw)
    }

    pub fn status(&self) -> RecordStatus {
        match self.raw.get("status").and_then(Value::as_str) {
            Some("active") => RecordStatus::Active,
            Some("pending") => RecordStatus::Pending,
            _ => RecordStatus::Other,
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self.raw.get("type") {
            Some(Value::String(s)) => match s.as_str() {
                "primary" => RecordType::Primary,
                "secondary" => RecordType::Secondary,
                "tertiary" => RecordType::Tertiary,
                other => RecordType::Other(Some(other.to_string())),
            },
            None | Some(Value::Null) => RecordType::Other(None),
            Some(other) => RecordType::Other(Some(other.to_string())),
        }
    }

    /// Defaults to 0.
    pub fn priority(&self) -> f64 {
        number_or(self.raw, "priority", 0.0)
    }

    pub fn categories(&self) -> &'a [Value] {
        sequence(self.raw, "categories")
    }

    /// Items used by the medium-priority path.
    pub fn items(&self) -> &'a [Value] {
        sequence(self.raw, "items")
    }

    pub fn batch_process(&self) -> bool {
        flag(self.raw, "batch_process")
    }

    pub fn batch_items(&self) -> &'a [Value] {
        sequence(self.raw, "batch_items")
    }

    pub fn auto_process(&self) -> bool {
        flag(self.raw, "auto_process")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_matches_flag_semantics() {
        assert!(!truthy(&json!(null)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!("")));
        assert!(!truthy(&json!([])));
        assert!(!truthy(&json!({})));
        assert!(truthy(&json!(0.1)));
        assert!(truthy(&json!("no")));
        assert!(truthy(&json!([0])));
    }

    #[test]
    fn accessors_fall_back_to_defaults() {
        let raw = json!({"priority": "high", "items": 3});
        let view = RecordView::new(&raw);
        assert_eq!(view.priority(), 0.0);
        assert!(view.items().is_empty());
        assert!(!view.batch_process());
        assert_eq!(view.id(), Value::Null);
        assert_eq!(view.status(), RecordStatus::Other);
        assert_eq!(view.record_type(), RecordType::Other(None));
    }

    #[test]
    fn booleans_read_as_one_and_zero() {
        let raw = json!({"weight": true, "priority": false, "label": "7"});
        assert_eq!(number_or(&raw, "weight", 0.5), 1.0);
        assert_eq!(number_or(&raw, "priority", 3.0), 0.0);
        assert_eq!(number_or(&raw, "label", 3.0), 3.0);
    }

    #[test]
    fn flag_or_honours_explicit_null() {
        let raw = json!({"valid": null});
        assert!(!flag_or(&raw, "valid", true));
        assert!(flag_or(&json!({}), "valid", true));
    }

    #[test]
    fn non_string_type_keeps_raw_text() {
        let raw = json!({"type": 7});
        assert_eq!(RecordView::new(&raw).record_type().name(), "7");
    }
}
