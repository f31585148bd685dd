//! Environment traits for injectable side effects.

use chrono::{DateTime, Utc};

/// Source of the current time.
///
/// Injected so that registration timestamps are deterministic in tests; see
/// `FixedClock` in `registrar-testing`.
pub trait Clock: Send + Sync {
    /// Current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used in production.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
