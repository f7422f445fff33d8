//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, errors)
//! - `polls` - Question and Choice entities, their invariants and predicates

pub mod foundation;
pub mod polls;
