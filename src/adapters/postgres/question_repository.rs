//! PostgreSQL implementation of QuestionRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::foundation::{DomainError, QuestionId, Timestamp};
use crate::domain::polls::{NewQuestion, Question};
use crate::ports::QuestionRepository;

/// PostgreSQL implementation of QuestionRepository.
///
/// Choices are removed by the `ON DELETE CASCADE` foreign key.
#[derive(Clone)]
pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn insert(&self, question: NewQuestion) -> Result<Question, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO questions (question_text, pub_date)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(question.question_text())
        .bind(question.pub_date().as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("insert question", e))?;

        let id: i64 = column(&row, "id")?;
        tracing::debug!(question_id = id, "question inserted");
        Ok(question.into_question(QuestionId::new(id)))
    }

    async fn update(&self, question: &Question) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE questions SET
                question_text = $2,
                pub_date = $3
            WHERE id = $1
            "#,
        )
        .bind(question.id().as_i64())
        .bind(question.question_text())
        .bind(question.pub_date().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("update question", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::question_not_found(question.id()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, DomainError> {
        let row = sqlx::query("SELECT id, question_text, pub_date FROM questions WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch question", e))?;

        row.as_ref().map(row_to_question).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Question>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, question_text, pub_date
            FROM questions
            ORDER BY pub_date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("list questions", e))?;

        rows.iter().map(row_to_question).collect()
    }

    async fn list_published(
        &self,
        now: Timestamp,
        limit: u32,
    ) -> Result<Vec<Question>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, question_text, pub_date
            FROM questions
            WHERE pub_date <= $1
            ORDER BY pub_date DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(now.as_datetime())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("list published questions", e))?;

        rows.iter().map(row_to_question).collect()
    }

    async fn count_choices(&self, id: QuestionId) -> Result<u64, DomainError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM choices WHERE question_id = $1")
                .bind(id.as_i64())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database("count choices", e))?;

        Ok(count.max(0) as u64)
    }

    async fn delete(&self, id: QuestionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete question", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::question_not_found(id));
        }

        tracing::debug!(question_id = %id, "question deleted with its choices");
        Ok(())
    }
}

fn row_to_question(row: &PgRow) -> Result<Question, DomainError> {
    let id: i64 = column(row, "id")?;
    let question_text: String = column(row, "question_text")?;
    let pub_date: chrono::DateTime<chrono::Utc> = column(row, "pub_date")?;

    Ok(Question::reconstitute(
        QuestionId::new(id),
        question_text,
        Timestamp::from_datetime(pub_date),
    ))
}
