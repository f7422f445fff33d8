//! Read models returned by the query handlers.

use crate::domain::polls::{Choice, Question};

/// A question together with its choices, ordered by choice id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDetail {
    pub question: Question,
    pub choices: Vec<Choice>,
}

impl QuestionDetail {
    /// Sum of the votes over all choices.
    pub fn total_votes(&self) -> i64 {
        self.choices.iter().map(|c| i64::from(c.votes())).sum()
    }
}

/// One row of the admin change list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSummary {
    pub question: Question,
    pub was_published_recently: bool,
    pub choice_count: u64,
}
