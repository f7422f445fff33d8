//! Question entity.
//!
//! A question is the parent record of a poll. It carries the prompt text and
//! the instant it was (or will be) published. Questions with a `pub_date` in
//! the future exist in storage but are hidden from the public polls API.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::text::validate_bounded_text;
use crate::domain::foundation::{DomainError, QuestionId, Timestamp};

/// Maximum length for question text, in characters.
pub const MAX_QUESTION_TEXT_LENGTH: usize = 200;

/// Width of the "published recently" window.
pub fn recent_window() -> Duration {
    Duration::days(1)
}

/// A question that has not been persisted yet and so has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question_text: String,
    pub_date: Timestamp,
}

impl NewQuestion {
    /// Validates and builds a new question.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the text exceeds [`MAX_QUESTION_TEXT_LENGTH`]
    pub fn new(question_text: String, pub_date: Timestamp) -> Result<Self, DomainError> {
        validate_bounded_text("question_text", &question_text, MAX_QUESTION_TEXT_LENGTH)?;
        Ok(Self {
            question_text,
            pub_date,
        })
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn pub_date(&self) -> &Timestamp {
        &self.pub_date
    }

    /// Attaches the id assigned by the store.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question::reconstitute(id, self.question_text, self.pub_date)
    }
}

/// A persisted poll question.
///
/// # Invariants
///
/// - `question_text` is at most 200 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    question_text: String,
    pub_date: Timestamp,
}

impl Question {
    /// Reconstitute a question from persistence (no validation).
    pub fn reconstitute(id: QuestionId, question_text: String, pub_date: Timestamp) -> Self {
        Self {
            id,
            question_text,
            pub_date,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    /// Returns the "date published".
    pub fn pub_date(&self) -> &Timestamp {
        &self.pub_date
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived predicates
    // ─────────────────────────────────────────────────────────────────────────

    /// True if `pub_date` falls within the day before `now`, inclusive at
    /// both ends. Future publication dates are not recent.
    pub fn was_published_recently(&self, now: Timestamp) -> bool {
        let window_start = now.minus(recent_window());
        !self.pub_date.is_before(&window_start) && !self.pub_date.is_after(&now)
    }

    /// True once `pub_date` has been reached.
    pub fn is_published(&self, now: Timestamp) -> bool {
        !self.pub_date.is_after(&now)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the question text, returning the old text.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the text is too long
    pub fn update_text(&mut self, question_text: String) -> Result<String, DomainError> {
        validate_bounded_text("question_text", &question_text, MAX_QUESTION_TEXT_LENGTH)?;
        Ok(std::mem::replace(&mut self.question_text, question_text))
    }

    /// Move the publication date, returning the old one.
    pub fn reschedule(&mut self, pub_date: Timestamp) -> Timestamp {
        std::mem::replace(&mut self.pub_date, pub_date)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.question_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn now() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
    }

    fn question_published_at(pub_date: Timestamp) -> Question {
        NewQuestion::new("What's new?".to_string(), pub_date)
            .unwrap()
            .into_question(QuestionId::new(1))
    }

    #[test]
    fn display_is_question_text() {
        let question = question_published_at(now());
        assert_eq!(question.to_string(), "What's new?");
    }

    #[test]
    fn new_question_rejects_text_over_limit() {
        let text = "q".repeat(MAX_QUESTION_TEXT_LENGTH + 1);
        assert!(NewQuestion::new(text, now()).is_err());
    }

    #[test]
    fn new_question_accepts_text_at_limit() {
        let text = "q".repeat(MAX_QUESTION_TEXT_LENGTH);
        assert!(NewQuestion::new(text, now()).is_ok());
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let text = "é".repeat(MAX_QUESTION_TEXT_LENGTH);
        assert!(text.len() > MAX_QUESTION_TEXT_LENGTH);
        assert!(NewQuestion::new(text, now()).is_ok());
    }

    #[test]
    fn text_is_stored_unchanged() {
        let question = NewQuestion::new("  padded  ".to_string(), now()).unwrap();
        assert_eq!(question.question_text(), "  padded  ");
    }

    #[test]
    fn published_an_hour_ago_is_recent() {
        let question = question_published_at(now().minus_hours(1));
        assert!(question.was_published_recently(now()));
    }

    #[test]
    fn published_two_days_ago_is_not_recent() {
        let question = question_published_at(now().minus_days(2));
        assert!(!question.was_published_recently(now()));
    }

    #[test]
    fn published_exactly_one_day_ago_is_recent() {
        let question = question_published_at(now().minus_days(1));
        assert!(question.was_published_recently(now()));
    }

    #[test]
    fn published_just_over_a_day_ago_is_not_recent() {
        let pub_date = now().minus(Duration::days(1) + Duration::seconds(1));
        let question = question_published_at(pub_date);
        assert!(!question.was_published_recently(now()));
    }

    #[test]
    fn future_question_is_not_recent_nor_published() {
        let question = question_published_at(now().plus_hours(1));
        assert!(!question.was_published_recently(now()));
        assert!(!question.is_published(now()));
    }

    #[test]
    fn update_text_returns_old_text() {
        let mut question = question_published_at(now());
        let old = question.update_text("What's up?".to_string()).unwrap();
        assert_eq!(old, "What's new?");
        assert_eq!(question.question_text(), "What's up?");
    }

    #[test]
    fn update_text_rejects_too_long_and_keeps_old() {
        let mut question = question_published_at(now());
        assert!(question.update_text("x".repeat(201)).is_err());
        assert_eq!(question.question_text(), "What's new?");
    }

    #[test]
    fn reschedule_returns_old_date() {
        let mut question = question_published_at(now());
        let old = question.reschedule(now().plus_hours(5));
        assert_eq!(old, now());
        assert_eq!(question.pub_date(), &now().plus_hours(5));
    }
}
