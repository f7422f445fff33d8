//! LatestQuestionsHandler - Query handler for the polls index.

use std::sync::Arc;

use crate::domain::polls::{PollsError, Question};
use crate::ports::{Clock, QuestionRepository};

/// How many questions the index shows.
pub const LATEST_QUESTIONS_LIMIT: u32 = 5;

/// Query for the most recently published questions.
#[derive(Debug, Clone, Copy)]
pub struct LatestQuestionsQuery {
    pub limit: u32,
}

impl Default for LatestQuestionsQuery {
    fn default() -> Self {
        Self {
            limit: LATEST_QUESTIONS_LIMIT,
        }
    }
}

/// Handler returning published questions, newest first.
pub struct LatestQuestionsHandler {
    questions: Arc<dyn QuestionRepository>,
    clock: Arc<dyn Clock>,
}

impl LatestQuestionsHandler {
    pub fn new(questions: Arc<dyn QuestionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { questions, clock }
    }

    pub async fn handle(&self, query: LatestQuestionsQuery) -> Result<Vec<Question>, PollsError> {
        let now = self.clock.now();
        let questions = self.questions.list_published(now, query.limit).await?;
        tracing::debug!(count = questions.len(), "latest questions loaded");
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{fixed_now, seed_question, store_and_clock};

    #[tokio::test]
    async fn empty_store_yields_no_questions() {
        let (store, clock) = store_and_clock();
        let handler = LatestQuestionsHandler::new(store, clock);

        let questions = handler.handle(LatestQuestionsQuery::default()).await.unwrap();

        assert!(questions.is_empty());
    }

    #[tokio::test]
    async fn shows_at_most_five_newest_published_questions() {
        let (store, clock) = store_and_clock();
        for day in 1..=7 {
            seed_question(&store, &format!("Day {day}"), fixed_now().minus_days(day)).await;
        }
        seed_question(&store, "Tomorrow", fixed_now().plus_hours(24)).await;

        let handler = LatestQuestionsHandler::new(store, clock);
        let questions = handler.handle(LatestQuestionsQuery::default()).await.unwrap();

        let texts: Vec<_> = questions.iter().map(|q| q.to_string()).collect();
        assert_eq!(texts, vec!["Day 1", "Day 2", "Day 3", "Day 4", "Day 5"]);
    }

    #[tokio::test]
    async fn question_becomes_visible_once_clock_reaches_pub_date() {
        let (store, clock) = store_and_clock();
        seed_question(&store, "Soon", fixed_now().plus_hours(2)).await;
        let handler = LatestQuestionsHandler::new(store, clock.clone());

        assert!(handler.handle(LatestQuestionsQuery::default()).await.unwrap().is_empty());

        clock.advance(chrono::Duration::hours(2));
        let questions = handler.handle(LatestQuestionsQuery::default()).await.unwrap();
        assert_eq!(questions.len(), 1);
    }
}
