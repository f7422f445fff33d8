//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//!
//! - `questions` - admin commands and queries over questions
//! - `choices` - admin commands over choices
//! - `voting` - public read side and vote casting

pub mod choices;
pub mod questions;
pub mod voting;

mod lookup;
mod views;

#[cfg(test)]
pub(crate) mod test_support;

pub use choices::{
    AddChoiceCommand, AddChoiceHandler, DeleteChoiceCommand, DeleteChoiceHandler,
    UpdateChoiceCommand, UpdateChoiceHandler,
};
pub use questions::{
    CreateQuestionCommand, CreateQuestionHandler, DeleteQuestionCommand, DeleteQuestionHandler,
    GetQuestionHandler, GetQuestionQuery, ListQuestionsHandler, UpdateQuestionCommand,
    UpdateQuestionHandler,
};
pub use views::{QuestionDetail, QuestionSummary};
pub use voting::{
    CastVoteCommand, CastVoteHandler, CastVoteResult, GetPublishedQuestionHandler,
    GetPublishedQuestionQuery, LatestQuestionsHandler, LatestQuestionsQuery,
    LATEST_QUESTIONS_LIMIT,
};
