//! Public polls handlers: the index, the detail/results pages and voting.

mod cast_vote;
mod get_published_question;
mod latest_questions;

pub use cast_vote::{CastVoteCommand, CastVoteHandler, CastVoteResult};
pub use get_published_question::{GetPublishedQuestionHandler, GetPublishedQuestionQuery};
pub use latest_questions::{LatestQuestionsHandler, LatestQuestionsQuery, LATEST_QUESTIONS_LIMIT};

use crate::domain::foundation::Timestamp;
use crate::domain::polls::{PollsError, Question};

/// Unpublished questions are indistinguishable from missing ones.
fn ensure_published(question: Question, now: Timestamp) -> Result<Question, PollsError> {
    if question.is_published(now) {
        Ok(question)
    } else {
        Err(PollsError::QuestionNotFound(question.id()))
    }
}
