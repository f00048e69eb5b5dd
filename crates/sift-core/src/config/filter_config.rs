//! Per-call filters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Fan out over item metadata in the deep path; when false each valid
    /// item yields one `simple` result instead. Default: true.
    pub include_metadata: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            include_metadata: true,
        }
    }
}
