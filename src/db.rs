//! SQLite connection setup and schema bootstrap

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};

const CREATE_BOOKS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS livros (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        titulo TEXT NOT NULL,
        autor TEXT NOT NULL,
        editora TEXT NOT NULL,
        categoria INTEGER NOT NULL,
        ano INTEGER,
        disponivel INTEGER NOT NULL DEFAULT 1 CHECK (disponivel IN (0, 1)),
        livro_status INTEGER NOT NULL DEFAULT 1
    )
"#;

/// Open a connection pool for the configured database.
///
/// The database file is created if missing. An in-memory database exists
/// only as long as its connection, so it gets a single connection that is
/// never recycled.
pub async fn connect(config: &DatabaseConfig) -> AppResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| AppError::Connection(format!("Invalid database URL {}: {}", config.url, e)))?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    let in_memory = config.url.contains(":memory:") || config.url.contains("mode=memory");

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(|e| AppError::Connection(format!("Failed to open database {}: {}", config.url, e)))?;

    tracing::debug!(url = %config.url, in_memory, "Database pool opened");
    Ok(pool)
}

/// Create the `livros` table if it does not exist yet
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query(CREATE_BOOKS_TABLE).execute(pool).await?;
    tracing::debug!("Schema ready");
    Ok(())
}

/// Connect and make sure the schema exists
pub async fn open(config: &DatabaseConfig) -> AppResult<SqlitePool> {
    let pool = connect(config).await?;
    init_schema(&pool).await?;
    Ok(pool)
}
