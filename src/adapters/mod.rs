//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `clock` - System and fixed clocks
//! - `http` - Axum routers for the polls pages and the admin site
//! - `memory` - In-memory poll store
//! - `postgres` - PostgreSQL repositories

pub mod clock;
pub mod http;
pub mod memory;
pub mod postgres;

pub use clock::{FixedClock, SystemClock};
pub use memory::InMemoryPollStore;
pub use postgres::{PostgresChoiceRepository, PostgresQuestionRepository};
