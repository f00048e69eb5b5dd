//! Recoverable per-item classification errors.

use super::error_code::{self, SiftErrorCode};

/// A failure while building a single result. The classifier skips the
/// offending metadata entry and keeps going; these never abort a run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    #[error("item {item_id}: field '{field}' is not numeric")]
    NonNumericField { field: String, item_id: String },

    #[error("item {item_id}: importance score is not finite")]
    NonFiniteScore { item_id: String },
}

impl SiftErrorCode for ClassifyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NonNumericField { .. } => error_code::NON_NUMERIC_FIELD,
            Self::NonFiniteScore { .. } => error_code::NON_FINITE_SCORE,
        }
    }
}
