//! Question repository port.
//!
//! Defines the contract for persisting and retrieving questions.
//! Deleting a question must also delete its choices.

use crate::domain::foundation::{DomainError, QuestionId, Timestamp};
use crate::domain::polls::{NewQuestion, Question};
use async_trait::async_trait;

/// Repository port for Question persistence.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Insert a new question and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, question: NewQuestion) -> Result<Question, DomainError>;

    /// Update an existing question.
    ///
    /// # Errors
    ///
    /// - `QuestionNotFound` if the question doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, question: &Question) -> Result<(), DomainError>;

    /// Find a question by its id. Returns `None` if not found.
    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, DomainError>;

    /// All questions, newest `pub_date` first.
    async fn list_all(&self) -> Result<Vec<Question>, DomainError>;

    /// Questions with `pub_date <= now`, newest first, at most `limit`.
    async fn list_published(
        &self,
        now: Timestamp,
        limit: u32,
    ) -> Result<Vec<Question>, DomainError>;

    /// Number of choices attached to a question.
    async fn count_choices(&self, id: QuestionId) -> Result<u64, DomainError>;

    /// Delete a question together with its choices.
    ///
    /// # Errors
    ///
    /// - `QuestionNotFound` if the question doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: QuestionId) -> Result<(), DomainError>;
}
