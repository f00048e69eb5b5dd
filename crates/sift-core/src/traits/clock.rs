//! Wall-clock source for `processed_at` / `finalized_at` stamps.

use chrono::Utc;

/// Supplies the current time as whole seconds since the Unix epoch.
///
/// Only ordering granularity matters to the classifier; results never depend
/// on the value for correctness.
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

/// Reads the system clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Always returns the same instant. Used for deterministic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    seconds: i64,
}

impl FixedClock {
    pub fn new(seconds: i64) -> Self {
        Self { seconds }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.seconds
    }
}
