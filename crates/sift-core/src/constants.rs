//! Compiled defaults and fixed cutoffs used by the classifier.

/// Subcategory weight cutoff for the deep fan-out path.
pub const DEFAULT_THRESHOLD: f64 = 0.75;

/// Declared iteration ceiling. Parsed and reported, never enforced.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

pub const DEFAULT_DEBUG_MODE: bool = false;

/// Records with a priority strictly above this take the deep fan-out path.
pub const HIGH_PRIORITY_CUTOFF: f64 = 5.0;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "SIFT_LOG";

/// Item types accepted by the validator.
pub const VALID_ITEM_TYPES: &[&str] = &["standard", "premium", "basic"];

/// Error text attached to results for records of an unrecognized type.
pub const UNKNOWN_TYPE_ERROR: &str = "Unknown type";

/// Importance scoring constants.
pub mod scoring {
    pub const DEFAULT_BASE_SCORE: f64 = 0.5;
    pub const DEFAULT_MULTIPLIER: f64 = 1.0;
    pub const PREMIUM_BONUS: f64 = 0.2;
    pub const FEATURED_BONUS: f64 = 0.1;
    pub const TRENDING_BONUS: f64 = 0.15;
    pub const MAX_SCORE: f64 = 1.0;
    /// Scores strictly above this are `high`.
    pub const HIGH_CUTOFF: f64 = 0.8;
    /// Scores strictly above this (and not high) are `medium`.
    pub const MEDIUM_CUTOFF: f64 = 0.5;
}
