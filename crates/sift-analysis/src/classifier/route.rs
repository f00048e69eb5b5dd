//! Per-record branch selection.

use sift_core::constants::HIGH_PRIORITY_CUTOFF;
use sift_core::OptionsConfig;

use crate::record::{RecordStatus, RecordType, RecordView};

/// The branch a record takes through the classifier.
///
/// `*Skipped` routes produce no output. `StrictSkipped` covers active
/// primary/secondary records above the priority cutoff when `strict` is off:
/// they do not fall back to the medium-priority path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    DeepFanOut,
    StrictSkipped,
    MediumPriority,
    Batch,
    Single,
    UnknownType,
    AutoPending,
    PendingSkipped,
    Inactive,
    InactiveSkipped,
}

impl Route {
    /// Select the route for `record` under `options`.
    pub fn select(record: &RecordView<'_>, options: &OptionsConfig) -> Self {
        match record.status() {
            RecordStatus::Active => match record.record_type() {
                RecordType::Primary | RecordType::Secondary => {
                    if record.priority() > HIGH_PRIORITY_CUTOFF {
                        if options.strict {
                            Self::DeepFanOut
                        } else {
                            Self::StrictSkipped
                        }
                    } else {
                        Self::MediumPriority
                    }
                }
                RecordType::Tertiary => {
                    if record.batch_process() {
                        Self::Batch
                    } else {
                        Self::Single
                    }
                }
                RecordType::Other(_) => Self::UnknownType,
            },
            RecordStatus::Pending => {
                if record.auto_process() {
                    Self::AutoPending
                } else {
                    Self::PendingSkipped
                }
            }
            RecordStatus::Other => {
                if options.include_inactive {
                    Self::Inactive
                } else {
                    Self::InactiveSkipped
                }
            }
        }
    }

    /// Whether this route can never emit a result.
    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            Self::StrictSkipped | Self::PendingSkipped | Self::InactiveSkipped
        )
    }
}
