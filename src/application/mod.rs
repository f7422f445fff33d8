//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers back the admin site; query handlers and `CastVoteHandler`
//! back the public polls pages.

pub mod handlers;

pub use handlers::{
    // Admin: questions
    CreateQuestionCommand, CreateQuestionHandler, DeleteQuestionCommand, DeleteQuestionHandler,
    GetQuestionHandler, GetQuestionQuery, ListQuestionsHandler, UpdateQuestionCommand,
    UpdateQuestionHandler,
    // Admin: choices
    AddChoiceCommand, AddChoiceHandler, DeleteChoiceCommand, DeleteChoiceHandler,
    UpdateChoiceCommand, UpdateChoiceHandler,
    // Public polls
    CastVoteCommand, CastVoteHandler, CastVoteResult, GetPublishedQuestionHandler,
    GetPublishedQuestionQuery, LatestQuestionsHandler, LatestQuestionsQuery,
    LATEST_QUESTIONS_LIMIT,
    // Read models
    QuestionDetail, QuestionSummary,
};
