//! GetPublishedQuestionHandler - Query handler for the detail and results pages.

use std::sync::Arc;

use super::ensure_published;
use crate::application::handlers::lookup::require_question;
use crate::application::handlers::views::QuestionDetail;
use crate::domain::foundation::QuestionId;
use crate::domain::polls::PollsError;
use crate::ports::{ChoiceRepository, Clock, QuestionRepository};

/// Query for a question visible to the public.
#[derive(Debug, Clone, Copy)]
pub struct GetPublishedQuestionQuery {
    pub question_id: QuestionId,
}

/// Handler loading a published question with its choices.
pub struct GetPublishedQuestionHandler {
    questions: Arc<dyn QuestionRepository>,
    choices: Arc<dyn ChoiceRepository>,
    clock: Arc<dyn Clock>,
}

impl GetPublishedQuestionHandler {
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

    pub async fn handle(
        &self,
        query: GetPublishedQuestionQuery,
    ) -> Result<QuestionDetail, PollsError> {
        let question = require_question(self.questions.as_ref(), query.question_id).await?;
        let question = ensure_published(question, self.clock.now())?;
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
    async fn returns_published_question_with_choices() {
        let (store, clock) = store_and_clock();
        let question = seed_question(&store, "Past", fixed_now().minus_days(30)).await;
        let choice = seed_choice(&store, question.id(), "Yes").await;

        let handler = GetPublishedQuestionHandler::new(store.clone(), store, clock);
        let detail = handler
            .handle(GetPublishedQuestionQuery {
                question_id: question.id(),
            })
            .await
            .unwrap();

        assert_eq!(detail.question, question);
        assert_eq!(detail.choices, vec![choice]);
    }

    #[tokio::test]
    async fn future_question_is_not_found() {
        let (store, clock) = store_and_clock();
        let question = seed_question(&store, "Future", fixed_now().plus_hours(1)).await;

        let handler = GetPublishedQuestionHandler::new(store.clone(), store, clock);
        let result = handler
            .handle(GetPublishedQuestionQuery {
                question_id: question.id(),
            })
            .await;

        assert_eq!(result, Err(PollsError::QuestionNotFound(question.id())));
    }

    #[tokio::test]
    async fn missing_question_is_not_found() {
        let (store, clock) = store_and_clock();
        let handler = GetPublishedQuestionHandler::new(store.clone(), store, clock);

        let result = handler
            .handle(GetPublishedQuestionQuery {
                question_id: QuestionId::new(1),
            })
            .await;

        assert_eq!(result, Err(PollsError::QuestionNotFound(QuestionId::new(1))));
    }
}
