//! Score-ranking utility for flat lists of mappings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::{flag_or, number_or};

/// A mapping that passed the `process` check, with its doubled `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub original: Value,
    pub processed: bool,
    pub score: f64,
}

/// Keep mappings whose `process` flag is truthy (absent counts as true),
/// score each as `value * 2` (`value` defaults to 0), and sort by score,
/// highest first. Ties keep input order.
pub fn rank_by_score(values: &[Value]) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = values
        .iter()
        .filter(|v| v.is_object() && flag_or(v, "process", true))
        .map(|v| RankedEntry {
            original: v.clone(),
            processed: true,
            score: number_or(v, "value", 0.0) * 2.0,
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
