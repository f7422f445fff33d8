//! PostgreSQL implementation of ChoiceRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::foundation::{ChoiceId, DomainError, QuestionId};
use crate::domain::polls::{vote_counter_overflow, Choice, ChoiceEdit, NewChoice};
use crate::ports::ChoiceRepository;

/// SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// SQLSTATE for `numeric_value_out_of_range`, raised by `votes + 1` at the
/// top of the `INTEGER` range.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// PostgreSQL implementation of ChoiceRepository.
#[derive(Clone)]
pub struct PostgresChoiceRepository {
    pool: PgPool,
}

impl PostgresChoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChoiceRepository for PostgresChoiceRepository {
    async fn insert(&self, choice: NewChoice) -> Result<Choice, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO choices (question_id, choice_text, votes)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(choice.question_id().as_i64())
        .bind(choice.choice_text())
        .bind(choice.votes())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if has_sqlstate(&e, FOREIGN_KEY_VIOLATION) {
                DomainError::question_not_found(choice.question_id())
            } else {
                DomainError::database("insert choice", e)
            }
        })?;

        let id: i64 = column(&row, "id")?;
        Ok(choice.into_choice(ChoiceId::new(id)))
    }

    async fn apply_edit(&self, id: ChoiceId, edit: &ChoiceEdit) -> Result<Choice, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE choices SET
                choice_text = COALESCE($2, choice_text),
                votes = COALESCE($3, votes)
            WHERE id = $1
            RETURNING id, question_id, choice_text, votes
            "#,
        )
        .bind(id.as_i64())
        .bind(edit.choice_text())
        .bind(edit.votes())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("update choice", e))?;

        match row {
            Some(row) => row_to_choice(&row),
            None => Err(DomainError::choice_not_found(id)),
        }
    }

    async fn find_by_id(&self, id: ChoiceId) -> Result<Option<Choice>, DomainError> {
        let row = sqlx::query(
            "SELECT id, question_id, choice_text, votes FROM choices WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch choice", e))?;

        row.as_ref().map(row_to_choice).transpose()
    }

    async fn list_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<Choice>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, question_id, choice_text, votes
            FROM choices
            WHERE question_id = $1
            ORDER BY id
            "#,
        )
        .bind(question_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("list choices", e))?;

        rows.iter().map(row_to_choice).collect()
    }

    async fn delete(&self, id: ChoiceId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM choices WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete choice", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::choice_not_found(id));
        }

        Ok(())
    }

    async fn increment_votes(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
    ) -> Result<Option<Choice>, DomainError> {
        // Single statement so concurrent votes are never lost.
        let row = sqlx::query(
            r#"
            UPDATE choices SET votes = votes + 1
            WHERE id = $1 AND question_id = $2
            RETURNING id, question_id, choice_text, votes
            "#,
        )
        .bind(choice_id.as_i64())
        .bind(question_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if has_sqlstate(&e, NUMERIC_VALUE_OUT_OF_RANGE) {
                vote_counter_overflow()
            } else {
                DomainError::database("record vote", e)
            }
        })?;

        row.as_ref().map(row_to_choice).transpose()
    }
}

fn has_sqlstate(err: &sqlx::Error, sqlstate: &str) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == sqlstate)
        .unwrap_or(false)
}

fn row_to_choice(row: &PgRow) -> Result<Choice, DomainError> {
    let id: i64 = column(row, "id")?;
    let question_id: i64 = column(row, "question_id")?;
    let choice_text: String = column(row, "choice_text")?;
    let votes: i32 = column(row, "votes")?;

    Ok(Choice::reconstitute(
        ChoiceId::new(id),
        QuestionId::new(question_id),
        choice_text,
        votes,
    ))
}
