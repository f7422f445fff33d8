//! Fixtures shared by handler tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::adapters::clock::FixedClock;
use crate::adapters::memory::InMemoryPollStore;
use crate::domain::foundation::{ChoiceId, DomainError, QuestionId, Timestamp};
use crate::domain::polls::{Choice, ChoiceEdit, NewChoice, NewQuestion, Question};
use crate::ports::{ChoiceRepository, QuestionRepository};

pub(crate) fn fixed_now() -> Timestamp {
    Timestamp::from_datetime(
        chrono::DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc),
    )
}

pub(crate) fn store_and_clock() -> (Arc<InMemoryPollStore>, Arc<FixedClock>) {
    (
        Arc::new(InMemoryPollStore::new()),
        Arc::new(FixedClock::new(fixed_now())),
    )
}

pub(crate) async fn seed_question(
    store: &InMemoryPollStore,
    text: &str,
    pub_date: Timestamp,
) -> Question {
    let new = NewQuestion::new(text.to_string(), pub_date).unwrap();
    QuestionRepository::insert(store, new).await.unwrap()
}

pub(crate) async fn seed_choice(store: &InMemoryPollStore, question_id: QuestionId, text: &str) -> Choice {
    let new = NewChoice::new(question_id, text.to_string(), None).unwrap();
    ChoiceRepository::insert(store, new).await.unwrap()
}

/// Repository whose every call fails like a lost database connection.
pub(crate) struct FailingStore;

fn unavailable() -> DomainError {
    DomainError::database("reach database", "connection refused")
}

#[async_trait]
impl QuestionRepository for FailingStore {
    async fn insert(&self, _question: NewQuestion) -> Result<Question, DomainError> {
        Err(unavailable())
    }

    async fn update(&self, _question: &Question) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: QuestionId) -> Result<Option<Question>, DomainError> {
        Err(unavailable())
    }

    async fn list_all(&self) -> Result<Vec<Question>, DomainError> {
        Err(unavailable())
    }

    async fn list_published(&self, _now: Timestamp, _limit: u32) -> Result<Vec<Question>, DomainError> {
        Err(unavailable())
    }

    async fn count_choices(&self, _id: QuestionId) -> Result<u64, DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: QuestionId) -> Result<(), DomainError> {
        Err(unavailable())
    }
}

#[async_trait]
impl ChoiceRepository for FailingStore {
    async fn insert(&self, _choice: NewChoice) -> Result<Choice, DomainError> {
        Err(unavailable())
    }

    async fn apply_edit(&self, _id: ChoiceId, _edit: &ChoiceEdit) -> Result<Choice, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: ChoiceId) -> Result<Option<Choice>, DomainError> {
        Err(unavailable())
    }

    async fn list_for_question(&self, _question_id: QuestionId) -> Result<Vec<Choice>, DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: ChoiceId) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn increment_votes(
        &self,
        _question_id: QuestionId,
        _choice_id: ChoiceId,
    ) -> Result<Option<Choice>, DomainError> {
        Err(unavailable())
    }
}
