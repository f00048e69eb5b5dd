//! Flat `{id, type, processed_at}` processors.

use serde_json::Value;
use tracing::warn;

use sift_core::constants::UNKNOWN_TYPE_ERROR;
use sift_core::Clock;

use crate::record::{id_of, RecordView};
use crate::results::{ProcessedItem, ResultKind, TaggedResult};

pub fn process_simple(item: &Value, clock: &dyn Clock) -> TaggedResult {
    TaggedResult::new(id_of(item), ResultKind::Simple, clock.now())
}

pub fn process_single(record: &RecordView<'_>, clock: &dyn Clock) -> TaggedResult {
    TaggedResult::new(record.id(), ResultKind::Single, clock.now())
}

pub fn process_auto_pending(record: &RecordView<'_>, clock: &dyn Clock) -> TaggedResult {
    TaggedResult::new(record.id(), ResultKind::AutoPending, clock.now())
}

pub fn process_inactive(record: &RecordView<'_>, clock: &dyn Clock) -> TaggedResult {
    TaggedResult::new(record.id(), ResultKind::Inactive, clock.now())
}

/// Append an error-tagged `unknown` result straight onto `processed`.
pub fn handle_unknown_type(
    record: &RecordView<'_>,
    processed: &mut Vec<ProcessedItem>,
    clock: &dyn Clock,
) {
    let record_type = record.record_type();
    warn!(record_type = record_type.name(), "unknown record type");
    processed.push(ProcessedItem::Tagged(TaggedResult {
        id: record.id(),
        kind: ResultKind::Unknown,
        error: Some(UNKNOWN_TYPE_ERROR.to_string()),
        processed_at: clock.now(),
    }));
}
