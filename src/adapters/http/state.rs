//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::application::handlers::{
    AddChoiceHandler, CastVoteHandler, CreateQuestionHandler, DeleteChoiceHandler,
    DeleteQuestionHandler, GetPublishedQuestionHandler, GetQuestionHandler,
    LatestQuestionsHandler, ListQuestionsHandler, UpdateChoiceHandler, UpdateQuestionHandler,
};
use crate::ports::{ChoiceRepository, Clock, QuestionRepository};

/// Dependencies shared by every request.
///
/// Cloned per request; all fields are Arc-wrapped ports.
#[derive(Clone)]
pub struct PollsAppState {
    pub questions: Arc<dyn QuestionRepository>,
    pub choices: Arc<dyn ChoiceRepository>,
    pub clock: Arc<dyn Clock>,
}

impl PollsAppState {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        choices: Arc<dyn ChoiceRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            questions,
            choices,
            clock,
        }
    }

    // Public polls pages

    pub fn latest_questions_handler(&self) -> LatestQuestionsHandler {
        LatestQuestionsHandler::new(self.questions.clone(), self.clock.clone())
    }

    pub fn get_published_question_handler(&self) -> GetPublishedQuestionHandler {
        GetPublishedQuestionHandler::new(
            self.questions.clone(),
            self.choices.clone(),
            self.clock.clone(),
        )
    }

    pub fn cast_vote_handler(&self) -> CastVoteHandler {
        CastVoteHandler::new(
            self.questions.clone(),
            self.choices.clone(),
            self.clock.clone(),
        )
    }

    // Admin site

    pub fn list_questions_handler(&self) -> ListQuestionsHandler {
        ListQuestionsHandler::new(self.questions.clone(), self.clock.clone())
    }

    pub fn get_question_handler(&self) -> GetQuestionHandler {
        GetQuestionHandler::new(self.questions.clone(), self.choices.clone())
    }

    pub fn create_question_handler(&self) -> CreateQuestionHandler {
        CreateQuestionHandler::new(self.questions.clone(), self.clock.clone())
    }

    pub fn update_question_handler(&self) -> UpdateQuestionHandler {
        UpdateQuestionHandler::new(self.questions.clone())
    }

    pub fn delete_question_handler(&self) -> DeleteQuestionHandler {
        DeleteQuestionHandler::new(self.questions.clone())
    }

    pub fn add_choice_handler(&self) -> AddChoiceHandler {
        AddChoiceHandler::new(self.questions.clone(), self.choices.clone())
    }

    pub fn update_choice_handler(&self) -> UpdateChoiceHandler {
        UpdateChoiceHandler::new(self.choices.clone())
    }

    pub fn delete_choice_handler(&self) -> DeleteChoiceHandler {
        DeleteChoiceHandler::new(self.choices.clone())
    }
}
