//! Wall clock used for record timestamps.

use crate::types::Timestamp;
use chrono::{Duration, Utc};
use parking_lot::Mutex;

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Clock that only moves when told to. Each `now()` call can optionally
/// advance by a fixed step so successive records get distinct timestamps.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<Timestamp>,
    step: Duration,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self::with_step(start, Duration::zero())
    }

    pub fn with_step(start: Timestamp, step: Duration) -> Self {
        Self {
            current: Mutex::new(start),
            step,
        }
    }

    pub fn set(&self, at: Timestamp) {
        *self.current.lock() = at;
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock();
        *current += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        let mut current = self.current.lock();
        let now = *current;
        *current += self.step;
        now
    }
}
