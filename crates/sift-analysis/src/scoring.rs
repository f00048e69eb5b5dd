//! Importance score calculator.

use serde_json::Value;

use sift_core::constants::scoring::{
    DEFAULT_BASE_SCORE, DEFAULT_MULTIPLIER, FEATURED_BONUS, MAX_SCORE, PREMIUM_BONUS,
    TRENDING_BONUS,
};
use sift_core::ClassifyError;

use crate::record::{as_number, flag, id_label};

/// Inputs to the importance score, already extracted from an item and its
/// metadata value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    pub base_score: f64,
    pub multiplier: f64,
    pub premium: bool,
    pub featured: bool,
    pub trending: bool,
}

impl Default for ScoreInputs {
    fn default() -> Self {
        Self {
            base_score: DEFAULT_BASE_SCORE,
            multiplier: DEFAULT_MULTIPLIER,
            premium: false,
            featured: false,
            trending: false,
        }
    }
}

impl ScoreInputs {
    /// Extract inputs: `base_score` from the metadata value, `multiplier` and
    /// the bonus flags from the item. A key that is present but not numeric
    /// is an error rather than a silent default; booleans count as 1 and 0.
    pub fn from_item(item: &Value, value: &Value) -> Result<Self, ClassifyError> {
        Ok(Self {
            base_score: numeric_field(value, item, "base_score", DEFAULT_BASE_SCORE)?,
            multiplier: numeric_field(item, item, "multiplier", DEFAULT_MULTIPLIER)?,
            premium: flag(item, "premium"),
            featured: flag(item, "featured"),
            trending: flag(item, "trending"),
        })
    }

    /// Sum of the independent flag bonuses.
    pub fn bonus(&self) -> f64 {
        let mut bonus = 0.0;
        if self.premium {
            bonus += PREMIUM_BONUS;
        }
        if self.featured {
            bonus += FEATURED_BONUS;
        }
        if self.trending {
            bonus += TRENDING_BONUS;
        }
        bonus
    }

    /// `min(1.0, base_score * multiplier + bonus)`.
    pub fn score(&self) -> f64 {
        (self.base_score * self.multiplier + self.bonus()).min(MAX_SCORE)
    }
}

/// Score an item's important metadata entry.
pub fn importance_score(item: &Value, value: &Value) -> Result<f64, ClassifyError> {
    let score = ScoreInputs::from_item(item, value)?.score();
    if !score.is_finite() {
        return Err(ClassifyError::NonFiniteScore {
            item_id: id_label(item),
        });
    }
    Ok(score)
}

fn numeric_field(
    source: &Value,
    item: &Value,
    key: &str,
    default: f64,
) -> Result<f64, ClassifyError> {
    match source.get(key) {
        None => Ok(default),
        Some(v) => as_number(v).ok_or_else(|| ClassifyError::NonNumericField {
            field: key.to_string(),
            item_id: id_label(item),
        }),
    }
}
