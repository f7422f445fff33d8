//! GetQuestionHandler - Query handler for one question with its choices.

use std::sync::Arc;

use crate::application::handlers::lookup::require_question;
use crate::application::handlers::views::QuestionDetail;
use crate::domain::foundation::QuestionId;
use crate::domain::polls::PollsError;
use crate::ports::{ChoiceRepository, QuestionRepository};

/// Query for a question regardless of its publication date.
#[derive(Debug, Clone, Copy)]
pub struct GetQuestionQuery {
    pub question_id: QuestionId,
}

/// Handler for the admin question page.
pub struct GetQuestionHandler {
    questions: Arc<dyn QuestionRepository>,
    choices: Arc<dyn ChoiceRepository>,
}

impl GetQuestionHandler {
    pub fn new(questions: Arc<dyn QuestionRepository>, choices: Arc<dyn ChoiceRepository>) -> Self {
        Self { questions, choices }
    }

    pub async fn handle(&self, query: GetQuestionQuery) -> Result<QuestionDetail, PollsError> {
        let question = require_question(self.questions.as_ref(), query.question_id).await?;
        let choices = self.choices.list_for_question(question.id()).await?;
        Ok(QuestionDetail { question, choices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        fixed_now, seed_choice, seed_question, store_and_clock,
    };

    #[tokio::test]
    async fn returns_future_question_with_choices() {
        let (store, _) = store_and_clock();
        let question = seed_question(&store, "Later", fixed_now().plus_hours(48)).await;
        let first = seed_choice(&store, question.id(), "First").await;
        let second = seed_choice(&store, question.id(), "Second").await;

        let handler = GetQuestionHandler::new(store.clone(), store);
        let detail = handler
            .handle(GetQuestionQuery {
                question_id: question.id(),
            })
            .await
            .unwrap();

        assert_eq!(detail.question, question);
        assert_eq!(detail.choices, vec![first, second]);
    }

    #[tokio::test]
    async fn fails_when_question_missing() {
        let (store, _) = store_and_clock();
        let handler = GetQuestionHandler::new(store.clone(), store);

        let result = handler
            .handle(GetQuestionQuery {
                question_id: QuestionId::new(3),
            })
            .await;

        assert_eq!(result, Err(PollsError::QuestionNotFound(QuestionId::new(3))));
    }
}
