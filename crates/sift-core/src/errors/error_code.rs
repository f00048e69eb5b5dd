//! Stable string codes for every error variant.

pub const NON_NUMERIC_FIELD: &str = "NON_NUMERIC_FIELD";
pub const NON_FINITE_SCORE: &str = "NON_FINITE_SCORE";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_VALIDATION_FAILED: &str = "CONFIG_VALIDATION_FAILED";

/// Maps an error to a code that embedders can match on without parsing text.
pub trait SiftErrorCode {
    fn error_code(&self) -> &'static str;
}
