//! Polls-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ChoiceId, DomainError, ErrorCode, QuestionId};

/// Errors returned by the polls command and query handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollsError {
    /// Question does not exist (or is not visible yet).
    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    /// Choice does not exist.
    #[error("Choice not found: {0}")]
    ChoiceNotFound(ChoiceId),

    /// A vote named no choice of the question.
    #[error("You didn't select a choice.")]
    NoChoiceSelected,

    /// Input failed validation.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Storage or other infrastructure failure.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl PollsError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PollsError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PollsError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PollsError::QuestionNotFound(_) => ErrorCode::QuestionNotFound,
            PollsError::ChoiceNotFound(_) => ErrorCode::ChoiceNotFound,
            PollsError::NoChoiceSelected | PollsError::ValidationFailed { .. } => {
                ErrorCode::ValidationFailed
            }
            PollsError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for PollsError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => PollsError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::QuestionNotFound => match err.detail("question_id").map(str::parse) {
                Some(Ok(id)) => PollsError::QuestionNotFound(id),
                _ => PollsError::Infrastructure(err.message),
            },
            ErrorCode::ChoiceNotFound => match err.detail("choice_id").map(str::parse) {
                Some(Ok(id)) => PollsError::ChoiceNotFound(id),
                _ => PollsError::Infrastructure(err.message),
            },
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                PollsError::Infrastructure(err.message)
            }
        }
    }
}
