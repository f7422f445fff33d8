//! ListQuestionsHandler - Query handler for the admin change list.

use std::sync::Arc;

use crate::application::handlers::views::QuestionSummary;
use crate::domain::polls::PollsError;
use crate::ports::{Clock, QuestionRepository};

/// Lists every question, future ones included, newest first.
pub struct ListQuestionsHandler {
    questions: Arc<dyn QuestionRepository>,
    clock: Arc<dyn Clock>,
}

impl ListQuestionsHandler {
    pub fn new(questions: Arc<dyn QuestionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { questions, clock }
    }

    pub async fn handle(&self) -> Result<Vec<QuestionSummary>, PollsError> {
        let now = self.clock.now();
        let questions = self.questions.list_all().await?;

        let mut summaries = Vec::with_capacity(questions.len());
        for question in questions {
            let choice_count = self.questions.count_choices(question.id()).await?;
            summaries.push(QuestionSummary {
                was_published_recently: question.was_published_recently(now),
                choice_count,
                question,
            });
        }

        tracing::debug!(count = summaries.len(), "listed questions");
        Ok(summaries)
    }
}
