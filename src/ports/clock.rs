//! Clock port.
//!
//! Anything that depends on "now" (publication checks, default pub dates)
//! reads it through this trait so tests can pin the instant.

use crate::domain::foundation::Timestamp;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
