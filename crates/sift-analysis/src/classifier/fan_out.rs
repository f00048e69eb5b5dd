//! Deep fan-out: categories → subcategories → items → metadata entries.

use serde_json::Value;
use tracing::{debug, warn};

use sift_core::{ClassifyError, Clock, FilterConfig, OptionsConfig};

use crate::processors::{process_important, process_simple};
use crate::record::{flag, number_or, sequence, RecordView};
use crate::results::ProcessedItem;

/// Read-only inputs shared by every step of one record's fan-out.
pub(crate) struct FanOut<'a> {
    pub threshold: f64,
    pub filters: &'a FilterConfig,
    pub options: &'a OptionsConfig,
    pub clock: &'a dyn Clock,
}

impl FanOut<'_> {
    /// Expand one record. Failed metadata entries are skipped and pushed to
    /// `errors`; siblings, the record, and the dataset scan carry on.
    pub fn expand(
        &self,
        record: &RecordView<'_>,
        record_index: usize,
        processed: &mut Vec<ProcessedItem>,
        errors: &mut Vec<ClassifyError>,
    ) {
        let subcategories = record
            .categories()
            .iter()
            .filter(|category| flag(category, "enabled"))
            .flat_map(|category| sequence(category, "subcategories"))
            .filter(|subcategory| number_or(subcategory, "weight", 0.0) > self.threshold);

        for subcategory in subcategories {
            for (item_index, item) in sequence(subcategory, "items").iter().enumerate() {
                if !flag(item, "valid") {
                    continue;
                }

                if !self.filters.include_metadata {
                    processed.push(process_simple(item, self.clock).into());
                    continue;
                }

                let Some(metadata) = item.get("metadata").and_then(Value::as_object) else {
                    continue;
                };

                for (key, value) in metadata {
                    if !value.is_object() || !flag(value, "important") {
                        continue;
                    }
                    match process_important(item, key, value, item_index, record_index, self.clock) {
                        Ok(result) => processed.push(result.into()),
                        Err(e) => {
                            if self.options.verbose {
                                warn!(item_index, record_index, key = %key, error = %e, "skipping metadata entry");
                            } else {
                                debug!(item_index, record_index, key = %key, error = %e, "skipping metadata entry");
                            }
                            errors.push(e);
                        }
                    }
                }
            }
        }
    }
}
