//! Polls module - questions and the choices that answer them.
//!
//! ```text
//! Question 1 ──< Choice
//!            (cascade delete)
//! ```

mod choice;
mod errors;
mod question;
mod text;

pub(crate) use choice::vote_counter_overflow;
pub use choice::{Choice, ChoiceEdit, NewChoice, MAX_CHOICE_TEXT_LENGTH};
pub use errors::PollsError;
pub use question::{recent_window, NewQuestion, Question, MAX_QUESTION_TEXT_LENGTH};
