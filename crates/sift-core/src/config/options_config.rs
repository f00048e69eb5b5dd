//! Per-call processing options.

use serde::{Deserialize, Serialize};

/// Switches recognized by `analyze`. Keys missing from a supplied mapping
/// take the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsConfig {
    /// Gates the deep fan-out path. Default: true.
    pub strict: bool,
    /// Log skipped metadata entries at WARN instead of DEBUG. Default: false.
    pub verbose: bool,
    /// Emit results for records that are neither active nor pending. Default: false.
    pub include_inactive: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            strict: true,
            verbose: false,
            include_inactive: false,
        }
    }
}
