//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresQuestionRepository` - `questions` table
//! - `PostgresChoiceRepository` - `choices` table, atomic vote increments
//!
//! Schema lives in `migrations/` and is applied with [`run_migrations`].

mod choice_repository;
mod question_repository;

pub use choice_repository::PostgresChoiceRepository;
pub use question_repository::PostgresQuestionRepository;

use secrecy::ExposeSecret;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Build a connection pool from configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(config.url.expose_secret())
        .await
}

/// Apply the embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Reads a column, mapping decode failures to `DatabaseError`.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("read column {}", name), e))
}
