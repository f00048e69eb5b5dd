//! Collaborator traits supplied by the embedder.

pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};
