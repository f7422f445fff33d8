//! Lookups shared by several handlers.

use crate::domain::foundation::{DomainError, QuestionId, ValidationError};
use crate::domain::polls::{PollsError, Question};
use crate::ports::QuestionRepository;

pub(crate) async fn require_question(
    questions: &dyn QuestionRepository,
    id: QuestionId,
) -> Result<Question, PollsError> {
    questions
        .find_by_id(id)
        .await?
        .ok_or(PollsError::QuestionNotFound(id))
}

/// Admin forms refuse whitespace-only text even though storage allows it.
pub(crate) fn reject_blank(field: &str, value: &str) -> Result<(), PollsError> {
    if value.trim().is_empty() {
        return Err(DomainError::from(ValidationError::empty_field(field)).into());
    }
    Ok(())
}
