//! # sift-core
//!
//! Foundation crate for the Sift record classifier.
//! Defines errors, config, constants, the clock collaborator, and tracing setup.
//! `sift-analysis` depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{AnalysisConfig, FilterConfig, OptionsConfig, SiftConfig};
pub use errors::{ClassifyError, ConfigError, SiftErrorCode};
pub use traits::{Clock, FixedClock, SystemClock};
