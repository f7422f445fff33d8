//! Clock adapters.
//!
//! - `SystemClock` - wall clock, used by the server
//! - `FixedClock` - pinned instant for tests, can be moved by hand

use std::sync::RwLock;

use chrono::Duration;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Reads the system's UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock that always reports the instant it was set to.
#[derive(Debug)]
pub struct FixedClock {
    instant: RwLock<Timestamp>,
}

impl FixedClock {
    pub fn new(instant: Timestamp) -> Self {
        Self {
            instant: RwLock::new(instant),
        }
    }

    /// Replace the reported instant.
    pub fn set(&self, instant: Timestamp) {
        *self.instant.write().unwrap_or_else(|e| e.into_inner()) = instant;
    }

    /// Move the reported instant forward (or back, for negative durations).
    pub fn advance(&self, by: Duration) {
        let mut instant = self.instant.write().unwrap_or_else(|e| e.into_inner());
        *instant = instant.plus(by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.instant.read().unwrap_or_else(|e| e.into_inner())
    }
}
