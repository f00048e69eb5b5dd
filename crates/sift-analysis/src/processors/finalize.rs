//! Seals the accumulator into the output bundle.

use sift_core::Clock;

use crate::results::{FinalizedResult, ProcessedItem};

pub fn finalize(data: Vec<ProcessedItem>, clock: &dyn Clock) -> FinalizedResult {
    FinalizedResult {
        total_processed: data.len(),
        data,
        finalized_at: clock.now(),
    }
}
