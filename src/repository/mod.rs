//! Repository layer for database operations

pub mod books;

use sqlx::{error::ErrorKind, SqlitePool};

use crate::error::{AppError, AppResult};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Check that the database answers
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Turn constraint violations raised by the store into validation errors;
/// everything else stays a database error.
pub(crate) fn integrity_error(context: &str, err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(db_err)
            if matches!(
                db_err.kind(),
                ErrorKind::UniqueViolation
                    | ErrorKind::CheckViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::ForeignKeyViolation
            ) =>
        {
            AppError::Validation(format!("{}: {}", context, db_err.message()))
        }
        other => AppError::Database(other),
    }
}
