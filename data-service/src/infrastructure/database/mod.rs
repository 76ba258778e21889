use shared::DomainError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub type DbPool = PgPool;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// True when `err` is a unique-constraint violation (Postgres SQLSTATE 23505).
/// Repositories that need to distinguish a race from a hard failure (e.g. the day
/// index's `IndexRace`) check this before falling back to [`map_db_err`].
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

/// Translates a raw `sqlx::Error` into the domain's error vocabulary.
pub fn map_db_err(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::RowNotFound = err {
        return DomainError::NotFound("row not found".to_string());
    }
    if is_unique_violation(&err) {
        return DomainError::ConflictState(err.to_string());
    }
    DomainError::DatabaseError(err.to_string())
}
