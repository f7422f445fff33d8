//! In-Memory Poll Store Adapter
//!
//! Implements both repository ports over one shared table set so that
//! deleting a question cascades to its choices, as the database does.
//! Backs the handler and router tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ChoiceId, DomainError, QuestionId, Timestamp};
use crate::domain::polls::{Choice, ChoiceEdit, NewChoice, NewQuestion, Question};
use crate::ports::{ChoiceRepository, QuestionRepository};

#[derive(Debug, Default)]
struct Tables {
    questions: BTreeMap<QuestionId, Question>,
    choices: BTreeMap<ChoiceId, Choice>,
    last_question_id: i64,
    last_choice_id: i64,
}

impl Tables {
    fn next_question_id(&mut self) -> QuestionId {
        self.last_question_id += 1;
        QuestionId::new(self.last_question_id)
    }

    fn next_choice_id(&mut self) -> ChoiceId {
        self.last_choice_id += 1;
        ChoiceId::new(self.last_choice_id)
    }
}

/// In-memory storage for questions and choices
#[derive(Debug, Clone, Default)]
pub struct InMemoryPollStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryPollStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored questions
    pub async fn question_count(&self) -> usize {
        self.tables.read().await.questions.len()
    }

    /// Number of stored choices across all questions
    pub async fn choice_count(&self) -> usize {
        self.tables.read().await.choices.len()
    }
}

/// Newest first; ids break ties so ordering is stable.
fn sort_newest_first(questions: &mut [Question]) {
    questions.sort_by(|a, b| {
        b.pub_date()
            .cmp(a.pub_date())
            .then_with(|| b.id().cmp(&a.id()))
    });
}

#[async_trait]
impl QuestionRepository for InMemoryPollStore {
    async fn insert(&self, question: NewQuestion) -> Result<Question, DomainError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_question_id();
        let question = question.into_question(id);
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn update(&self, question: &Question) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        match tables.questions.get_mut(&question.id()) {
            Some(stored) => {
                *stored = question.clone();
                Ok(())
            }
            None => Err(DomainError::question_not_found(question.id())),
        }
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, DomainError> {
        Ok(self.tables.read().await.questions.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Question>, DomainError> {
        let mut questions: Vec<Question> =
            self.tables.read().await.questions.values().cloned().collect();
        sort_newest_first(&mut questions);
        Ok(questions)
    }

    async fn list_published(
        &self,
        now: Timestamp,
        limit: u32,
    ) -> Result<Vec<Question>, DomainError> {
        let mut questions: Vec<Question> = self
            .tables
            .read()
            .await
            .questions
            .values()
            .filter(|q| q.is_published(now))
            .cloned()
            .collect();
        sort_newest_first(&mut questions);
        questions.truncate(limit as usize);
        Ok(questions)
    }

    async fn count_choices(&self, id: QuestionId) -> Result<u64, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.choices.values().filter(|c| c.belongs_to(id)).count() as u64)
    }

    async fn delete(&self, id: QuestionId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if tables.questions.remove(&id).is_none() {
            return Err(DomainError::question_not_found(id));
        }
        tables.choices.retain(|_, choice| !choice.belongs_to(id));
        Ok(())
    }
}

#[async_trait]
impl ChoiceRepository for InMemoryPollStore {
    async fn insert(&self, choice: NewChoice) -> Result<Choice, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.questions.contains_key(&choice.question_id()) {
            return Err(DomainError::question_not_found(choice.question_id()));
        }
        let id = tables.next_choice_id();
        let choice = choice.into_choice(id);
        tables.choices.insert(id, choice.clone());
        Ok(choice)
    }

    async fn apply_edit(&self, id: ChoiceId, edit: &ChoiceEdit) -> Result<Choice, DomainError> {
        let mut tables = self.tables.write().await;
        match tables.choices.get_mut(&id) {
            Some(stored) => {
                stored.apply(edit);
                Ok(stored.clone())
            }
            None => Err(DomainError::choice_not_found(id)),
        }
    }

    async fn find_by_id(&self, id: ChoiceId) -> Result<Option<Choice>, DomainError> {
        Ok(self.tables.read().await.choices.get(&id).cloned())
    }

    async fn list_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<Choice>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .choices
            .values()
            .filter(|c| c.belongs_to(question_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: ChoiceId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        match tables.choices.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::choice_not_found(id)),
        }
    }

    async fn increment_votes(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
    ) -> Result<Option<Choice>, DomainError> {
        let mut tables = self.tables.write().await;
        match tables.choices.get_mut(&choice_id) {
            Some(choice) if choice.belongs_to(question_id) => {
                choice.record_vote()?;
                Ok(Some(choice.clone()))
            }
            _ => Ok(None),
        }
    }
}
