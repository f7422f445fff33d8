//! In-memory adapters for tests and database-less local runs.

mod poll_store;

pub use poll_store::InMemoryPollStore;
