use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::error::{AppError, Result};

const PEOPLE_SCHEMA: &str = include_str!("../../../resources/schema.sql");

const PEOPLE_SCHEMA_VERSION: i32 = 1;

/// Create the people database if missing and apply the schema additively.
///
/// Versioned with PRAGMA user_version; a database newer than this build
/// fails fast instead of being modified.
pub async fn init_people_db(db_path: &Path) -> Result<()> {
    let pool = connect_pool(db_path).await?;

    let current_version: i32 = sqlx::query_scalar("PRAGMA user_version")
        .fetch_one(&pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Failed to read PRAGMA user_version: {}", e))
        })?;

    if current_version > PEOPLE_SCHEMA_VERSION {
        return Err(AppError::DatabaseError(format!(
            "People database schema too new: db user_version={} > app supported_version={}",
            current_version, PEOPLE_SCHEMA_VERSION
        )));
    }

    apply_schema(&pool).await?;

    let stmt = format!("PRAGMA user_version = {}", PEOPLE_SCHEMA_VERSION);
    sqlx::query(&stmt)
        .execute(&pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to set PRAGMA user_version: {}", e)))?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("People database health check failed: {}", e))
        })?;

    Ok(())
}

/// Apply every statement in the bundled schema.
/// Everything is CREATE ... IF NOT EXISTS, so re-running is safe.
pub(crate) async fn apply_schema(pool: &SqlitePool) -> Result<()> {
    for stmt in PEOPLE_SCHEMA.split(';') {
        let sql = stmt.trim();
        if sql.is_empty() {
            continue;
        }
        sqlx::query(sql).execute(pool).await.map_err(|e| {
            AppError::DatabaseError(format!("Failed to apply schema statement: {}", e))
        })?;
    }
    Ok(())
}

pub(crate) async fn connect_pool(db_path: &Path) -> Result<SqlitePool> {
    let db_url = db_path_to_url(db_path)?;
    let options = SqliteConnectOptions::from_str(&db_url)
        .map_err(|e| AppError::DatabaseError(format!("Failed to parse people DB URL: {}", e)))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(4)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to connect people DB: {}", e)))
}

fn db_path_to_url(db_path: &Path) -> Result<String> {
    let db_path_str = db_path.to_str().ok_or_else(|| {
        AppError::DatabaseError("People database path is not valid UTF-8".to_string())
    })?;
    Ok(format!("sqlite://{}", db_path_str.replace("\\", "/")))
}
