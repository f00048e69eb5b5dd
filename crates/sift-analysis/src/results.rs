//! Result records produced by the item processors and the finalized bundle.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use sift_core::constants::scoring::{HIGH_CUTOFF, MEDIUM_CUTOFF};

/// The `type` tag carried by flat results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Simple,
    Single,
    Unknown,
    AutoPending,
    Inactive,
}

impl ResultKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Single => "single",
            Self::Unknown => "unknown",
            Self::AutoPending => "auto_pending",
            Self::Inactive => "inactive",
        }
    }
}

/// Importance bucket derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportanceCategory {
    High,
    Medium,
    Low,
}

impl ImportanceCategory {
    /// `high` above 0.8, `medium` above 0.5, `low` otherwise.
    pub fn from_score(score: f64) -> Self {
        if score > HIGH_CUTOFF {
            Self::High
        } else if score > MEDIUM_CUTOFF {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Priority label on medium-priority results. Only one value exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLabel {
    #[default]
    Medium,
}

/// One important metadata entry of a valid item on the deep fan-out path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportantResult {
    pub id: Value,
    pub key: String,
    /// The metadata value mapping, verbatim.
    pub value: Value,
    /// Position of the item within its subcategory.
    pub index: usize,
    /// Position of the record within the dataset.
    pub parent_index: usize,
    pub processed_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ImportanceCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetrics {
    /// Character length of the item's compact JSON text.
    pub size: usize,
    /// Number of keys when the item is a mapping, else 1.
    pub complexity: usize,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediumPriorityResult {
    pub id: Value,
    pub priority: PriorityLabel,
    pub processed_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ItemMetrics>,
}

/// Flat `{id, type, processed_at}` result, with `error` set only for
/// unknown-type records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedResult {
    pub id: Value,
    #[serde(rename = "type")]
    pub kind: ResultKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub processed_at: i64,
}

impl TaggedResult {
    pub fn new(id: Value, kind: ResultKind, processed_at: i64) -> Self {
        Self {
            id,
            kind,
            error: None,
            processed_at,
        }
    }
}

/// Any entry of the accumulated output sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessedItem {
    Important(ImportantResult),
    MediumPriority(MediumPriorityResult),
    Tagged(TaggedResult),
}

impl ProcessedItem {
    pub fn id(&self) -> &Value {
        match self {
            Self::Important(r) => &r.id,
            Self::MediumPriority(r) => &r.id,
            Self::Tagged(r) => &r.id,
        }
    }

    /// The `type` tag for flat results, `None` for the other shapes.
    pub fn kind(&self) -> Option<ResultKind> {
        match self {
            Self::Tagged(r) => Some(r.kind),
            _ => None,
        }
    }

    pub fn as_important(&self) -> Option<&ImportantResult> {
        match self {
            Self::Important(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_medium_priority(&self) -> Option<&MediumPriorityResult> {
        match self {
            Self::MediumPriority(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_tagged(&self) -> Option<&TaggedResult> {
        match self {
            Self::Tagged(r) => Some(r),
            _ => None,
        }
    }
}

impl From<ImportantResult> for ProcessedItem {
    fn from(r: ImportantResult) -> Self {
        Self::Important(r)
    }
}

impl From<MediumPriorityResult> for ProcessedItem {
    fn from(r: MediumPriorityResult) -> Self {
        Self::MediumPriority(r)
    }
}

impl From<TaggedResult> for ProcessedItem {
    fn from(r: TaggedResult) -> Self {
        Self::Tagged(r)
    }
}

/// The sealed output of one `analyze` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizedResult {
    /// Always equal to `data.len()`.
    pub total_processed: usize,
    pub data: Vec<ProcessedItem>,
    pub finalized_at: i64,
}

impl FinalizedResult {
    /// Number of flat results carrying the given `type` tag.
    pub fn count_kind(&self, kind: ResultKind) -> usize {
        self.data.iter().filter(|d| d.kind() == Some(kind)).count()
    }
}
