//! Per-branch item processors.
//!
//! Each processor builds one result shape and stamps it with the supplied
//! clock. Only [`importance::process_important`] can fail; only
//! [`tagged::handle_unknown_type`] writes into the accumulator itself.

pub mod batch;
pub mod finalize;
pub mod importance;
pub mod medium;
pub mod tagged;

pub use batch::process_batch;
pub use finalize::finalize;
pub use importance::process_important;
pub use medium::{basic_metrics, process_medium_priority};
pub use tagged::{
    handle_unknown_type, process_auto_pending, process_inactive, process_simple, process_single,
};
