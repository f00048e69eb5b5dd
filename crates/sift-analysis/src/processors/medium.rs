//! Medium-priority processor.

use serde_json::Value;

use sift_core::Clock;

use crate::record::{flag, id_of};
use crate::results::{ItemMetrics, MediumPriorityResult, PriorityLabel};

pub fn process_medium_priority(item: &Value, clock: &dyn Clock) -> MediumPriorityResult {
    MediumPriorityResult {
        id: id_of(item),
        priority: PriorityLabel::Medium,
        processed_at: clock.now(),
        metrics: flag(item, "calculate_metrics").then(|| basic_metrics(item, clock)),
    }
}

pub fn basic_metrics(item: &Value, clock: &dyn Clock) -> ItemMetrics {
    ItemMetrics {
        size: item.to_string().chars().count(),
        complexity: item.as_object().map_or(1, |fields| fields.len()),
        timestamp: clock.now(),
    }
}
