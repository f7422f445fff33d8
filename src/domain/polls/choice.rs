//! Choice entity.
//!
//! Each choice belongs to exactly one question and counts the votes it has
//! received. Deleting the question deletes its choices.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::text::validate_bounded_text;
use crate::domain::foundation::{ChoiceId, DomainError, QuestionId, ValidationError};

/// Maximum length for choice text, in characters.
pub const MAX_CHOICE_TEXT_LENGTH: usize = 200;

/// A choice that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChoice {
    question_id: QuestionId,
    choice_text: String,
    votes: i32,
}

impl NewChoice {
    /// Validates and builds a new choice. `votes` defaults to 0.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the text is too long or votes are negative
    pub fn new(
        question_id: QuestionId,
        choice_text: String,
        votes: Option<i32>,
    ) -> Result<Self, DomainError> {
        validate_bounded_text("choice_text", &choice_text, MAX_CHOICE_TEXT_LENGTH)?;
        let votes = votes.unwrap_or(0);
        validate_votes(votes)?;
        Ok(Self {
            question_id,
            choice_text,
            votes,
        })
    }

    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    pub fn choice_text(&self) -> &str {
        &self.choice_text
    }

    pub fn votes(&self) -> i32 {
        self.votes
    }

    /// Attaches the id assigned by the store.
    pub fn into_choice(self, id: ChoiceId) -> Choice {
        Choice::reconstitute(id, self.question_id, self.choice_text, self.votes)
    }
}

/// A persisted answer option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    id: ChoiceId,
    question_id: QuestionId,
    choice_text: String,
    votes: i32,
}

impl Choice {
    /// Reconstitute a choice from persistence (no validation).
    pub fn reconstitute(
        id: ChoiceId,
        question_id: QuestionId,
        choice_text: String,
        votes: i32,
    ) -> Self {
        Self {
            id,
            question_id,
            choice_text,
            votes,
        }
    }

    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    pub fn choice_text(&self) -> &str {
        &self.choice_text
    }

    pub fn votes(&self) -> i32 {
        self.votes
    }

    /// Checks whether this choice answers the given question.
    pub fn belongs_to(&self, question_id: QuestionId) -> bool {
        self.question_id == question_id
    }

    /// Apply an already validated edit.
    pub fn apply(&mut self, edit: &ChoiceEdit) {
        if let Some(text) = &edit.choice_text {
            self.choice_text = text.clone();
        }
        if let Some(votes) = edit.votes {
            self.votes = votes;
        }
    }

    /// Count one more vote and return the new total.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the counter would overflow
    pub fn record_vote(&mut self) -> Result<i32, DomainError> {
        self.votes = self
            .votes
            .checked_add(1)
            .ok_or_else(vote_counter_overflow)?;
        Ok(self.votes)
    }
}

/// Admin edit of a stored choice. `None` fields keep the stored value, so a
/// text-only edit never touches the vote counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceEdit {
    choice_text: Option<String>,
    votes: Option<i32>,
}

impl ChoiceEdit {
    /// # Errors
    ///
    /// - `ValidationFailed` if the text is too long or votes are negative
    pub fn new(choice_text: Option<String>, votes: Option<i32>) -> Result<Self, DomainError> {
        if let Some(text) = &choice_text {
            validate_bounded_text("choice_text", text, MAX_CHOICE_TEXT_LENGTH)?;
        }
        if let Some(votes) = votes {
            validate_votes(votes)?;
        }
        Ok(Self { choice_text, votes })
    }

    pub fn choice_text(&self) -> Option<&str> {
        self.choice_text.as_deref()
    }

    pub fn votes(&self) -> Option<i32> {
        self.votes
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.choice_text)
    }
}

/// Raised when one more vote would not fit the counter.
pub(crate) fn vote_counter_overflow() -> DomainError {
    ValidationError::invalid_value("votes", "vote counter overflow").into()
}

fn validate_votes(votes: i32) -> Result<(), DomainError> {
    if votes < 0 {
        return Err(ValidationError::invalid_value("votes", "must not be negative").into());
    }
    Ok(())
}
