//! Time source used to stamp new entries.

use chrono::{DateTime, Utc};

/// Supplies the instant a submission happens.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock of the running machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant, for deterministic callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
