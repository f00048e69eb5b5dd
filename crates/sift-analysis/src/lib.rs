//! # sift-analysis
//!
//! Single-pass record classifier. Each record is routed by status, type,
//! priority and the `strict` option, expanded through the matching item
//! processor, and the accumulated results are sealed into a
//! [`FinalizedResult`].

pub mod classifier;
pub mod processors;
pub mod ranking;
pub mod record;
pub mod results;
pub mod scoring;
pub mod validation;

pub use classifier::{AnalysisOutcome, RecordClassifier, Route};
pub use ranking::{rank_by_score, RankedEntry};
pub use record::{RecordStatus, RecordType, RecordView};
pub use results::{
    FinalizedResult, ImportanceCategory, ImportantResult, ItemMetrics, MediumPriorityResult,
    ProcessedItem, ResultKind, TaggedResult,
};
pub use scoring::{importance_score, ScoreInputs};
pub use validation::validate;
