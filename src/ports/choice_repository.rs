//! Choice repository port.

use crate::domain::foundation::{ChoiceId, DomainError, QuestionId};
use crate::domain::polls::{Choice, ChoiceEdit, NewChoice};
use async_trait::async_trait;

/// Repository port for Choice persistence.
#[async_trait]
pub trait ChoiceRepository: Send + Sync {
    /// Insert a new choice and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `QuestionNotFound` if the parent question doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, choice: NewChoice) -> Result<Choice, DomainError>;

    /// Write the fields set in `edit` and return the stored choice.
    ///
    /// Fields left `None` are not written, so votes counted while the edit
    /// was in flight survive a text-only edit.
    ///
    /// # Errors
    ///
    /// - `ChoiceNotFound` if the choice doesn't exist
    async fn apply_edit(&self, id: ChoiceId, edit: &ChoiceEdit) -> Result<Choice, DomainError>;

    /// Find a choice by its id.
    async fn find_by_id(&self, id: ChoiceId) -> Result<Option<Choice>, DomainError>;

    /// Choices of a question, in insertion order.
    async fn list_for_question(&self, question_id: QuestionId)
        -> Result<Vec<Choice>, DomainError>;

    /// Delete a single choice.
    ///
    /// # Errors
    ///
    /// - `ChoiceNotFound` if the choice doesn't exist
    async fn delete(&self, id: ChoiceId) -> Result<(), DomainError>;

    /// Atomically add one vote to `choice_id` if it belongs to `question_id`.
    ///
    /// Returns the updated choice, or `None` when no such choice exists for
    /// that question.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the counter is already at its maximum
    async fn increment_votes(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
    ) -> Result<Option<Choice>, DomainError>;
}
