//! Importance processor for important metadata entries.

use serde_json::Value;

use sift_core::{ClassifyError, Clock};

use crate::record::{flag, id_of};
use crate::results::{ImportanceCategory, ImportantResult};
use crate::scoring::importance_score;

/// Build the result for one important metadata entry. When the entry asks
/// for `calculate_score`, the score and its category are attached.
pub fn process_important(
    item: &Value,
    key: &str,
    value: &Value,
    index: usize,
    parent_index: usize,
    clock: &dyn Clock,
) -> Result<ImportantResult, ClassifyError> {
    let mut result = ImportantResult {
        id: id_of(item),
        key: key.to_string(),
        value: value.clone(),
        index,
        parent_index,
        processed_at: clock.now(),
        score: None,
        category: None,
    };

    if flag(value, "calculate_score") {
        let score = importance_score(item, value)?;
        result.score = Some(score);
        result.category = Some(ImportanceCategory::from_score(score));
    }

    Ok(result)
}
