//! Top-level Sift configuration with layered resolution.

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, FilterConfig, OptionsConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`SIFT_*`)
/// 3. TOML text supplied by the embedder
/// 4. Compiled defaults
///
/// The crate never touches the filesystem; callers read `sift.toml`
/// themselves and pass its contents in.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SiftConfig {
    pub analysis: AnalysisConfig,
    pub options: OptionsConfig,
    pub filters: FilterConfig,
}

/// Override arguments that win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub threshold: Option<f64>,
    pub strict: Option<bool>,
    pub verbose: Option<bool>,
    pub include_inactive: Option<bool>,
    pub include_metadata: Option<bool>,
}

impl SiftConfig {
    /// Resolve configuration from optional TOML text, the environment, and
    /// optional overrides, then validate the result.
    pub fn load(
        toml_str: Option<&str>,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match toml_str {
            Some(text) => Self::from_toml(text)?,
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Parse configuration from a TOML string. Unknown keys are ignored.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SiftConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.analysis.threshold {
            if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.threshold".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(max_iterations) = config.analysis.max_iterations {
            if max_iterations == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.max_iterations".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `SIFT_ANALYSIS_THRESHOLD`, `SIFT_OPTIONS_STRICT`, etc.
    /// Unparsable values are ignored.
    fn apply_env_overrides(config: &mut SiftConfig) {
        if let Ok(val) = std::env::var("SIFT_ANALYSIS_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.analysis.threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SIFT_ANALYSIS_MAX_ITERATIONS") {
            if let Ok(v) = val.parse::<u32>() {
                config.analysis.max_iterations = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SIFT_ANALYSIS_DEBUG_MODE") {
            if let Ok(v) = val.parse::<bool>() {
                config.analysis.debug_mode = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SIFT_OPTIONS_STRICT") {
            if let Ok(v) = val.parse::<bool>() {
                config.options.strict = v;
            }
        }
        if let Ok(val) = std::env::var("SIFT_OPTIONS_VERBOSE") {
            if let Ok(v) = val.parse::<bool>() {
                config.options.verbose = v;
            }
        }
        if let Ok(val) = std::env::var("SIFT_OPTIONS_INCLUDE_INACTIVE") {
            if let Ok(v) = val.parse::<bool>() {
                config.options.include_inactive = v;
            }
        }
        if let Ok(val) = std::env::var("SIFT_FILTERS_INCLUDE_METADATA") {
            if let Ok(v) = val.parse::<bool>() {
                config.filters.include_metadata = v;
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut SiftConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.threshold {
            config.analysis.threshold = Some(v);
        }
        if let Some(v) = overrides.strict {
            config.options.strict = v;
        }
        if let Some(v) = overrides.verbose {
            config.options.verbose = v;
        }
        if let Some(v) = overrides.include_inactive {
            config.options.include_inactive = v;
        }
        if let Some(v) = overrides.include_metadata {
            config.filters.include_metadata = v;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
