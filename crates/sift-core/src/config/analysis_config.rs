//! Global analysis constants, read-only during a run.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DEBUG_MODE, DEFAULT_MAX_ITERATIONS, DEFAULT_THRESHOLD};

/// Thresholds shared by every `analyze` call on a classifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Subcategory weight cutoff for the deep fan-out path. Default: 0.75.
    pub threshold: Option<f64>,
    /// Declared but not consulted by the classifier. Default: 1000.
    pub max_iterations: Option<u32>,
    /// Declared but not consulted by the classifier. Default: false.
    pub debug_mode: Option<bool>,
}

impl AnalysisConfig {
    /// Returns the effective weight threshold, defaulting to 0.75.
    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }

    /// Returns the effective iteration ceiling, defaulting to 1000.
    pub fn effective_max_iterations(&self) -> u32 {
        self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS)
    }

    /// Returns the effective debug flag, defaulting to false.
    pub fn effective_debug_mode(&self) -> bool {
        self.debug_mode.unwrap_or(DEFAULT_DEBUG_MODE)
    }
}
