//! Batch processor for tertiary records with `batch_process` set.

use sift_core::Clock;

use super::tagged::process_simple;
use crate::record::RecordView;
use crate::results::TaggedResult;
use crate::validation::validate;

/// Every valid batch item becomes a `simple` result, in input order.
pub fn process_batch(record: &RecordView<'_>, clock: &dyn Clock) -> Vec<TaggedResult> {
    record
        .batch_items()
        .iter()
        .filter(|item| validate(item))
        .map(|item| process_simple(item, clock))
        .collect()
}
