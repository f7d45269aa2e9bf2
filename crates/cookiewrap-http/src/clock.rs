use chrono::{DateTime, Utc};

/// Source of the current time, used to derive `Expires` from `Max-Age`.
///
/// Production code uses [`SystemClock`]; tests pin time with [`FixedClock`]
/// so the derived expiry can be asserted exactly.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
