//! Configuration system for Sift.
//! TOML-based, 3-layer resolution: overrides > env > TOML text > defaults.

pub mod analysis_config;
pub mod filter_config;
pub mod options_config;
pub mod sift_config;

pub use analysis_config::AnalysisConfig;
pub use filter_config::FilterConfig;
pub use options_config::OptionsConfig;
pub use sift_config::{ConfigOverrides, SiftConfig};
