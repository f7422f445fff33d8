//! CastVoteHandler - Command handler for voting on a published question.

use std::sync::Arc;

use super::ensure_published;
use crate::application::handlers::lookup::require_question;
use crate::application::handlers::views::QuestionDetail;
use crate::domain::foundation::{ChoiceId, QuestionId};
use crate::domain::polls::{Choice, PollsError};
use crate::ports::{ChoiceRepository, Clock, QuestionRepository};

/// Command to vote for one choice of a question.
#[derive(Debug, Clone, Copy)]
pub struct CastVoteCommand {
    pub question_id: QuestionId,
    /// `None` when the voter submitted without selecting anything.
    pub choice_id: Option<ChoiceId>,
}

/// Outcome of a successful vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastVoteResult {
    /// The choice after the increment.
    pub choice: Choice,
    /// Fresh results for the question.
    pub results: QuestionDetail,
}

/// Handler for casting votes.
pub struct CastVoteHandler {
    questions: Arc<dyn QuestionRepository>,
    choices: Arc<dyn ChoiceRepository>,
    clock: Arc<dyn Clock>,
}

impl CastVoteHandler {
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

    pub async fn handle(&self, cmd: CastVoteCommand) -> Result<CastVoteResult, PollsError> {
        // 1. Question must exist and be visible
        let question = require_question(self.questions.as_ref(), cmd.question_id).await?;
        let question = ensure_published(question, self.clock.now())?;

        // 2. A choice of this question must be selected
        let choice_id = cmd.choice_id.ok_or(PollsError::NoChoiceSelected)?;

        // 3. Increment in storage; None means the choice is not one of ours
        let choice = match self.choices.increment_votes(question.id(), choice_id).await? {
            Some(choice) => choice,
            None => {
                tracing::debug!(
                    question_id = %question.id(),
                    choice_id = %choice_id,
                    "vote rejected: choice does not belong to question"
                );
                return Err(PollsError::NoChoiceSelected);
            }
        };

        tracing::info!(
            question_id = %question.id(),
            choice_id = %choice.id(),
            votes = choice.votes(),
            "vote recorded"
        );

        // 4. Reload results
        let choices = self.choices.list_for_question(question.id()).await?;

        Ok(CastVoteResult {
            choice,
            results: QuestionDetail { question, choices },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        fixed_now, seed_choice, seed_question, store_and_clock,
    };

    #[tokio::test]
    async fn vote_increments_selected_choice_only() {
        let (store, clock) = store_and_clock();
        let question = seed_question(&store, "What's up?", fixed_now().minus_hours(1)).await;
        let picked = seed_choice(&store, question.id(), "Not much").await;
        let other = seed_choice(&store, question.id(), "The sky").await;

        let handler = CastVoteHandler::new(store.clone(), store.clone(), clock);
        let cmd = CastVoteCommand {
            question_id: question.id(),
            choice_id: Some(picked.id()),
        };
        handler.handle(cmd).await.unwrap();
        let result = handler.handle(cmd).await.unwrap();

        assert_eq!(result.choice.votes(), 2);
        let votes: Vec<_> = result
            .results
            .choices
            .iter()
            .map(|c| (c.id(), c.votes()))
            .collect();
        assert_eq!(votes, vec![(picked.id(), 2), (other.id(), 0)]);
        assert_eq!(result.results.total_votes(), 2);
    }

    #[tokio::test]
    async fn missing_selection_is_rejected() {
        let (store, clock) = store_and_clock();
        let question = seed_question(&store, "What's up?", fixed_now()).await;
        seed_choice(&store, question.id(), "Not much").await;

        let handler = CastVoteHandler::new(store.clone(), store, clock);
        let result = handler
            .handle(CastVoteCommand {
                question_id: question.id(),
                choice_id: None,
            })
            .await;

        assert_eq!(result, Err(PollsError::NoChoiceSelected));
    }

    #[tokio::test]
    async fn choice_of_another_question_is_rejected() {
        let (store, clock) = store_and_clock();
        let asked = seed_question(&store, "Asked", fixed_now()).await;
        let other = seed_question(&store, "Other", fixed_now()).await;
        let foreign = seed_choice(&store, other.id(), "Foreign").await;

        let handler = CastVoteHandler::new(store.clone(), store.clone(), clock);
        let result = handler
            .handle(CastVoteCommand {
                question_id: asked.id(),
                choice_id: Some(foreign.id()),
            })
            .await;

        assert_eq!(result, Err(PollsError::NoChoiceSelected));
        let stored = ChoiceRepository::find_by_id(store.as_ref(), foreign.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.votes(), 0);
    }

    #[tokio::test]
    async fn unknown_choice_is_rejected() {
        let (store, clock) = store_and_clock();
        let question = seed_question(&store, "What's up?", fixed_now()).await;

        let handler = CastVoteHandler::new(store.clone(), store, clock);
        let result = handler
            .handle(CastVoteCommand {
                question_id: question.id(),
                choice_id: Some(ChoiceId::new(404)),
            })
            .await;

        assert_eq!(result, Err(PollsError::NoChoiceSelected));
    }

    #[tokio::test]
    async fn voting_on_future_question_is_not_found() {
        let (store, clock) = store_and_clock();
        let question = seed_question(&store, "Future", fixed_now().plus_hours(3)).await;
        let choice = seed_choice(&store, question.id(), "Early").await;

        let handler = CastVoteHandler::new(store.clone(), store.clone(), clock);
        let result = handler
            .handle(CastVoteCommand {
                question_id: question.id(),
                choice_id: Some(choice.id()),
            })
            .await;

        assert_eq!(result, Err(PollsError::QuestionNotFound(question.id())));
        let stored = ChoiceRepository::find_by_id(store.as_ref(), choice.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.votes(), 0);
    }

    #[tokio::test]
    async fn concurrent_votes_are_all_counted() {
        let (store, clock) = store_and_clock();
        let question = seed_question(&store, "Busy", fixed_now()).await;
        let choice = seed_choice(&store, question.id(), "Popular").await;
        let handler = Arc::new(CastVoteHandler::new(store.clone(), store.clone(), clock));

        let mut tasks = Vec::new();
        for _ in 0..20 {
            let handler = handler.clone();
            let cmd = CastVoteCommand {
                question_id: question.id(),
                choice_id: Some(choice.id()),
            };
            tasks.push(tokio::spawn(async move { handler.handle(cmd).await }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored = ChoiceRepository::find_by_id(store.as_ref(), choice.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.votes(), 20);
    }
}
