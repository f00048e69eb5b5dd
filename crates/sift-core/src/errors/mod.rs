//! Error handling for Sift.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod classify_error;
pub mod config_error;
pub mod error_code;

pub use classify_error::ClassifyError;
pub use config_error::ConfigError;
pub use error_code::SiftErrorCode;
