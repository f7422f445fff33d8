//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuestionRepository` - Question persistence (delete cascades to choices)
//! - `ChoiceRepository` - Choice persistence and atomic vote counting
//! - `Clock` - Source of the current instant

mod choice_repository;
mod clock;
mod question_repository;

pub use choice_repository::ChoiceRepository;
pub use clock::Clock;
pub use question_repository::QuestionRepository;
